wire_enum! {
    /// How the payload bytes of a message are interpreted
    pub enum PayloadType(UnknownPayloadType) {
        /// NUL-terminated text
        #[default]
        String = 0 => "P_STRING",
        Byte = 1 => "P_BYTE",
        Int16 = 2 => "P_INT16",
        UInt16 = 3 => "P_UINT16",
        Long32 = 4 => "P_LONG32",
        ULong32 = 5 => "P_ULONG32",
        /// Opaque binary
        Custom = 6 => "P_CUSTOM",
        Float32 = 7 => "P_FLOAT32",
        /// Carries no payload
        Heartbeat = 8 => "P_HEARTBEAT",
    }
    aliases {}
}

impl PayloadType {
    /// Byte width of fixed-width payloads, `None` for variable-length ones
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Byte => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Long32 | Self::ULong32 | Self::Float32 => Some(4),
            Self::Heartbeat => Some(0),
            Self::String | Self::Custom => None,
        }
    }
}

/// Typed view of a payload.
///
/// Numeric values travel little-endian on every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadValue<'a> {
    Str(&'a str),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Long32(i32),
    ULong32(u32),
    Custom(&'a [u8]),
    Float32(f32),
    Heartbeat,
}

impl PayloadValue<'_> {
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Self::Str(_) => PayloadType::String,
            Self::Byte(_) => PayloadType::Byte,
            Self::Int16(_) => PayloadType::Int16,
            Self::UInt16(_) => PayloadType::UInt16,
            Self::Long32(_) => PayloadType::Long32,
            Self::ULong32(_) => PayloadType::ULong32,
            Self::Custom(_) => PayloadType::Custom,
            Self::Float32(_) => PayloadType::Float32,
            Self::Heartbeat => PayloadType::Heartbeat,
        }
    }
}
