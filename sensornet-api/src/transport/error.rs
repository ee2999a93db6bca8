use core::fmt;

use alloc::string::String;

use crate::message::MessageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// I/O operation failed
    Io(String),
    /// Frame failed to encode or decode
    Message(MessageError),
    /// Fewer bytes than the link framing needs
    Truncated { expected: usize, actual: usize },
    /// Link flags carry bits this side does not understand
    UnknownFlags(u8),
    /// CRC checksum validation failed
    CrcMismatch,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Message(e) => write!(f, "Message error: {}", e),
            Self::Truncated { expected, actual } => write!(
                f,
                "Truncated link frame: {} bytes (expected {})",
                actual, expected
            ),
            Self::UnknownFlags(flags) => write!(f, "Unknown link flags: {:#04x}", flags),
            Self::CrcMismatch => write!(f, "CRC checksum mismatch"),
        }
    }
}

impl From<MessageError> for TransportError {
    fn from(error: MessageError) -> Self {
        Self::Message(error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Message(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, TransportError>;
