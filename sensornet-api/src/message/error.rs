use core::fmt;

use alloc::string::String;

use super::payload::PayloadType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Requested payload size exceeds the frame capacity
    PayloadTooLarge(usize),
    /// Command byte outside the known range
    UnknownCommand(u8),
    /// Sensor type byte outside the known range
    UnknownSensorType(u8),
    /// Information type byte outside the known range
    UnknownInformationType(u8),
    /// System message type byte outside the known range
    UnknownSystemMessageType(u8),
    /// Stream type byte outside the known range
    UnknownStreamType(u8),
    /// Payload type byte outside the known range
    UnknownPayloadType(u8),
    /// Label matches no variant or deprecated alias
    UnknownName(String),
    /// Fewer bytes than the frame advertises
    FrameTooShort { expected: usize, actual: usize },
    /// Output buffer cannot hold the encoded frame
    BufferTooSmall { required: usize, available: usize },
    /// Typed access against a different declared payload type
    PayloadTypeMismatch {
        expected: PayloadType,
        actual: PayloadType,
    },
    /// Declared payload size does not match the fixed width of its type
    PayloadSizeMismatch {
        payload_type: PayloadType,
        expected: usize,
        actual: usize,
    },
    /// STRING payload is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadTooLarge(size) => write!(
                f,
                "Payload too large: {} bytes (maximum {})",
                size,
                crate::MAX_PAYLOAD_SIZE
            ),
            Self::UnknownCommand(v) => write!(f, "Unknown command: {}", v),
            Self::UnknownSensorType(v) => write!(f, "Unknown sensor type: {}", v),
            Self::UnknownInformationType(v) => write!(f, "Unknown information type: {}", v),
            Self::UnknownSystemMessageType(v) => write!(f, "Unknown system message type: {}", v),
            Self::UnknownStreamType(v) => write!(f, "Unknown stream type: {}", v),
            Self::UnknownPayloadType(v) => write!(f, "Unknown payload type: {}", v),
            Self::UnknownName(name) => write!(f, "Unknown name: {}", name),
            Self::FrameTooShort { expected, actual } => write!(
                f,
                "Frame too short: {} bytes (expected {})",
                actual, expected
            ),
            Self::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "Buffer too small: {} bytes (required {})",
                available, required
            ),
            Self::PayloadTypeMismatch { expected, actual } => write!(
                f,
                "Payload type mismatch: expected {}, found {}",
                expected, actual
            ),
            Self::PayloadSizeMismatch {
                payload_type,
                expected,
                actual,
            } => write!(
                f,
                "Payload size mismatch for {}: expected {} bytes, found {}",
                payload_type, expected, actual
            ),
            Self::InvalidUtf8 => write!(f, "String payload is not valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MessageError {}

pub type Result<T> = core::result::Result<T, MessageError>;
