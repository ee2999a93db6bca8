use sensornet_api::{MessageError, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No reply from gateway within {0} ms")]
    Timeout(u64),

    #[error("Task failed: {0}")]
    Task(String),
}
