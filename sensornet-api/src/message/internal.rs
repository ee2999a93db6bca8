wire_enum! {
    /// Control event carried by an internal message
    pub enum SystemMessageType(UnknownSystemMessageType) {
        #[default]
        BatteryLevel = 0 => "I_BATTERY_LEVEL",
        Time = 1 => "I_TIME",
        Version = 2 => "I_VERSION",
        IdRequest = 3 => "I_ID_REQUEST",
        IdResponse = 4 => "I_ID_RESPONSE",
        InclusionMode = 5 => "I_INCLUSION_MODE",
        Config = 6 => "I_CONFIG",
        FindParent = 7 => "I_FIND_PARENT",
        FindParentResponse = 8 => "I_FIND_PARENT_RESPONSE",
        LogMessage = 9 => "I_LOG_MESSAGE",
        Children = 10 => "I_CHILDREN",
        SketchName = 11 => "I_SKETCH_NAME",
        SketchVersion = 12 => "I_SKETCH_VERSION",
        Reboot = 13 => "I_REBOOT",
        GatewayReady = 14 => "I_GATEWAY_READY",
        /// Signing preferences, first byte is the preference version
        SigningPresentation = 15 => "I_SIGNING_PRESENTATION",
        NonceRequest = 16 => "I_NONCE_REQUEST",
        /// Payload is nonce data
        NonceResponse = 17 => "I_NONCE_RESPONSE",
        HeartbeatRequest = 18 => "I_HEARTBEAT",
        Presentation = 19 => "I_PRESENTATION",
        Discover = 20 => "I_DISCOVER",
        DiscoverResponse = 21 => "I_DISCOVER_RESPONSE",
        HeartbeatResponse = 22 => "I_HEARTBEAT_RESPONSE",
        /// Node is locked, reason in the string payload
        Locked = 23 => "I_LOCKED",
        /// Payload is an incrementing hop counter
        Ping = 24 => "I_PING",
        Pong = 25 => "I_PONG",
        RegistrationRequest = 26 => "I_REGISTRATION_REQUEST",
        RegistrationResponse = 27 => "I_REGISTRATION_RESPONSE",
        Debug = 28 => "I_DEBUG",
        SpecialFunctionsList = 29 => "I_SPECIAL_FUNCTIONSLIST",
    }
    aliases {}
}
