wire_enum! {
    /// High-level message kind.
    ///
    /// The command decides which subtype field of the header is meaningful:
    /// presentation, set and request messages use the sensor and information
    /// types, internal messages the system message type, stream messages the
    /// stream type carried in the information byte.
    pub enum Command(UnknownCommand) {
        /// Sent by a node when it presents attached sensors
        #[default]
        Presentation = 0 => "C_PRESENTATION",
        /// Sensor value update, to or from a sensor
        Set = 1 => "C_SET",
        /// Requests a variable value
        Req = 2 => "C_REQ",
        /// Control messages generated by the library itself
        Internal = 3 => "C_INTERNAL",
        /// Chunk of a larger transfer such as a firmware image
        Stream = 4 => "C_STREAM",
    }
    aliases {}
}

impl Command {
    /// Whether the sensor and information type fields carry meaning
    pub fn uses_sensor_fields(&self) -> bool {
        matches!(self, Self::Presentation | Self::Set | Self::Req)
    }
}
