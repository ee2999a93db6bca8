wire_enum! {
    /// Kind of chunked transfer carried by a stream message
    pub enum StreamType(UnknownStreamType) {
        /// Request new firmware, payload holds the current firmware details
        #[default]
        FirmwareConfigRequest = 0 => "ST_FIRMWARE_CONFIG_REQUEST",
        /// New firmware details that start an update
        FirmwareConfigResponse = 1 => "ST_FIRMWARE_CONFIG_RESPONSE",
        /// Request one firmware block
        FirmwareRequest = 2 => "ST_FIRMWARE_REQUEST",
        /// One firmware block
        FirmwareResponse = 3 => "ST_FIRMWARE_RESPONSE",
        Sound = 4 => "ST_SOUND",
        Image = 5 => "ST_IMAGE",
        FunctionsList = 6 => "ST_FUNCTIONSLIST",
    }
    aliases {}
}
