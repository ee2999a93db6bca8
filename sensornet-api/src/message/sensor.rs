wire_enum! {
    /// Physical or logical sensor class, used when presenting sensors
    pub enum SensorType(UnknownSensorType) {
        #[default]
        Door = 0 => "S_DOOR",
        Motion = 1 => "S_MOTION",
        Smoke = 2 => "S_SMOKE",
        /// Binary light or relay
        Binary = 3 => "S_BINARY",
        Dimmer = 4 => "S_DIMMER",
        /// Blinds or window cover
        Cover = 5 => "S_COVER",
        Temp = 6 => "S_TEMP",
        Hum = 7 => "S_HUM",
        Baro = 8 => "S_BARO",
        Wind = 9 => "S_WIND",
        Rain = 10 => "S_RAIN",
        Uv = 11 => "S_UV",
        Weight = 12 => "S_WEIGHT",
        Power = 13 => "S_POWER",
        Heater = 14 => "S_HEATER",
        Distance = 15 => "S_DISTANCE",
        LightLevel = 16 => "S_LIGHT_LEVEL",
        /// Non-repeating node
        ArduinoNode = 17 => "S_ARDUINO_NODE",
        /// Repeating node
        ArduinoRepeaterNode = 18 => "S_ARDUINO_REPEATER_NODE",
        Lock = 19 => "S_LOCK",
        Ir = 20 => "S_IR",
        Water = 21 => "S_WATER",
        AirQuality = 22 => "S_AIR_QUALITY",
        Custom = 23 => "S_CUSTOM",
        Dust = 24 => "S_DUST",
        SceneController = 25 => "S_SCENE_CONTROLLER",
        RgbLight = 26 => "S_RGB_LIGHT",
        RgbwLight = 27 => "S_RGBW_LIGHT",
        ColorSensor = 28 => "S_COLOR_SENSOR",
        Hvac = 29 => "S_HVAC",
        Multimeter = 30 => "S_MULTIMETER",
        Sprinkler = 31 => "S_SPRINKLER",
        WaterLeak = 32 => "S_WATER_LEAK",
        Sound = 33 => "S_SOUND",
        Vibration = 34 => "S_VIBRATION",
        Moisture = 35 => "S_MOISTURE",
        /// LCD text or simple information device
        Info = 36 => "S_INFO",
        Gas = 37 => "S_GAS",
        Gps = 38 => "S_GPS",
        WaterQuality = 39 => "S_WATER_QUALITY",
    }
    aliases {
        "S_LIGHT" => Binary,
    }
}

impl SensorType {
    #[deprecated(note = "use SensorType::Binary")]
    pub const LIGHT: Self = Self::Binary;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageError;

    #[test]
    fn test_sensor_type_range() {
        assert_eq!(SensorType::ALL.len(), 40);
        for (tag, sensor) in SensorType::ALL.iter().enumerate() {
            assert_eq!(sensor.as_u8() as usize, tag);
            assert_eq!(SensorType::from_u8(tag as u8).unwrap(), *sensor);
        }
        assert_eq!(
            SensorType::from_u8(40),
            Err(MessageError::UnknownSensorType(40))
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_sensor_type_light_alias() {
        assert_eq!(SensorType::LIGHT, SensorType::Binary);
        assert_eq!(SensorType::LIGHT.as_u8(), 3);
        assert_eq!(SensorType::from_name("S_LIGHT").unwrap(), SensorType::Binary);
        assert_eq!(SensorType::LIGHT.name(), "S_BINARY");
    }
}
