use std::env;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sensornet_api::{InformationType, NodeAddress, SensorType};

const DEFAULT_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../",
    "configs/default.toml"
));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub host: String,
    pub port: u16,
    pub crc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Light,
}

impl SensorKind {
    pub fn sensor_type(&self) -> SensorType {
        match self {
            SensorKind::Temperature => SensorType::Temp,
            SensorKind::Humidity => SensorType::Hum,
            SensorKind::Light => SensorType::LightLevel,
        }
    }

    pub fn information_type(&self) -> InformationType {
        match self {
            SensorKind::Temperature => InformationType::Temp,
            SensorKind::Humidity => InformationType::Hum,
            // Lux, not the percentage carried by V_LIGHT_LEVEL
            SensorKind::Light => InformationType::Level,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::Light => "Ambient light",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub id: u8,
    pub kind: SensorKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub address: u16,
    pub sketch_name: String,
    pub sketch_version: String,
    pub report_interval_ms: u64,
    /// Report cycles before the node leaves; runs forever when unset
    pub cycles: Option<u32>,
    pub sensors: Vec<Sensor>,
}

impl Node {
    pub fn node_address(&self) -> NodeAddress {
        NodeAddress(self.address)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub gateway: Gateway,
    pub nodes: Vec<Node>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(
                Environment::with_prefix("SENSORNET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
