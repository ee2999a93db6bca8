use super::stream::StreamType;

wire_enum! {
    /// Semantic meaning of a set or request value.
    ///
    /// Three labels survive from older protocol revisions as aliases:
    /// `V_LIGHT` for [`InformationType::Status`], `V_DIMMER` for
    /// [`InformationType::Percentage`] and `V_HEATER` for
    /// [`InformationType::HvacFlowState`]. They share the canonical wire tag.
    pub enum InformationType(UnknownInformationType) {
        #[default]
        Temp = 0 => "V_TEMP",
        Hum = 1 => "V_HUM",
        /// Binary on/off status, 1 = on
        Status = 2 => "V_STATUS",
        /// Percentage 0-100
        Percentage = 3 => "V_PERCENTAGE",
        Pressure = 4 => "V_PRESSURE",
        /// Weather forecast text such as "stable" or "sunny"
        Forecast = 5 => "V_FORECAST",
        Rain = 6 => "V_RAIN",
        RainRate = 7 => "V_RAINRATE",
        Wind = 8 => "V_WIND",
        Gust = 9 => "V_GUST",
        /// Wind direction in degrees
        Direction = 10 => "V_DIRECTION",
        Uv = 11 => "V_UV",
        Weight = 12 => "V_WEIGHT",
        Distance = 13 => "V_DISTANCE",
        Impedance = 14 => "V_IMPEDANCE",
        /// Armed status of a security sensor, 1 = armed
        Armed = 15 => "V_ARMED",
        /// Tripped status of a security sensor, 1 = tripped
        Tripped = 16 => "V_TRIPPED",
        Watt = 17 => "V_WATT",
        Kwh = 18 => "V_KWH",
        SceneOn = 19 => "V_SCENE_ON",
        SceneOff = 20 => "V_SCENE_OFF",
        HvacFlowState = 21 => "V_HVAC_FLOW_STATE",
        HvacSpeed = 22 => "V_HVAC_SPEED",
        /// Uncalibrated light level, 0-100%
        LightLevel = 23 => "V_LIGHT_LEVEL",
        Var1 = 24 => "V_VAR1",
        Var2 = 25 => "V_VAR2",
        Var3 = 26 => "V_VAR3",
        Var4 = 27 => "V_VAR4",
        Var5 = 28 => "V_VAR5",
        Up = 29 => "V_UP",
        Down = 30 => "V_DOWN",
        Stop = 31 => "V_STOP",
        IrSend = 32 => "V_IR_SEND",
        IrReceive = 33 => "V_IR_RECEIVE",
        Flow = 34 => "V_FLOW",
        Volume = 35 => "V_VOLUME",
        /// 1 = locked
        LockStatus = 36 => "V_LOCK_STATUS",
        /// Generic level: dust, air quality, sound in dB, lux
        Level = 37 => "V_LEVEL",
        Voltage = 38 => "V_VOLTAGE",
        Current = 39 => "V_CURRENT",
        /// ASCII hex RRGGBB
        Rgb = 40 => "V_RGB",
        /// ASCII hex RRGGBBWW
        Rgbw = 41 => "V_RGBW",
        Id = 42 => "V_ID",
        UnitPrefix = 43 => "V_UNIT_PREFIX",
        HvacSetpointCool = 44 => "V_HVAC_SETPOINT_COOL",
        HvacSetpointHeat = 45 => "V_HVAC_SETPOINT_HEAT",
        HvacFlowMode = 46 => "V_HVAC_FLOW_MODE",
        Text = 47 => "V_TEXT",
        Custom = 48 => "V_CUSTOM",
        /// "latitude;longitude;altitude"
        Position = 49 => "V_POSITION",
        IrRecord = 50 => "V_IR_RECORD",
        Ph = 51 => "V_PH",
        /// Redox potential in mV
        Orp = 52 => "V_ORP",
        /// Electric conductivity in uS/cm
        Ec = 53 => "V_EC",
        Var = 54 => "V_VAR",
        Va = 55 => "V_VA",
        /// Real over apparent power, -1..=1
        PowerFactor = 56 => "V_POWER_FACTOR",
    }
    aliases {
        "V_LIGHT" => Status,
        "V_DIMMER" => Percentage,
        "V_HEATER" => HvacFlowState,
    }
}

impl InformationType {
    #[deprecated(note = "use InformationType::Status")]
    pub const LIGHT: Self = Self::Status;

    #[deprecated(note = "use InformationType::Percentage")]
    pub const DIMMER: Self = Self::Percentage;

    #[deprecated(note = "use InformationType::HvacFlowState")]
    pub const HEATER: Self = Self::HvacFlowState;
}

impl From<StreamType> for InformationType {
    /// Stream messages reuse the information byte for their stream type.
    fn from(stream: StreamType) -> Self {
        match stream {
            StreamType::FirmwareConfigRequest => Self::Temp,
            StreamType::FirmwareConfigResponse => Self::Hum,
            StreamType::FirmwareRequest => Self::Status,
            StreamType::FirmwareResponse => Self::Percentage,
            StreamType::Sound => Self::Pressure,
            StreamType::Image => Self::Forecast,
            StreamType::FunctionsList => Self::Rain,
        }
    }
}
