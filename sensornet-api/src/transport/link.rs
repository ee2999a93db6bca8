use core::fmt;

use serde::{Deserialize, Serialize};

use super::error::TransportError;

/// Transport-level address of a mesh node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeAddress(pub u16);

impl NodeAddress {
    pub const GATEWAY: Self = Self(0);
    pub const BROADCAST: Self = Self(0xFFFF);
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkFlags(u8);

impl LinkFlags {
    const CRC: u8 = 0b0000_0001;
    const KNOWN: u8 = Self::CRC;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn with_crc(mut self) -> Self {
        self.0 |= Self::CRC;
        self
    }

    pub fn has_crc(&self) -> bool {
        (self.0 & Self::CRC) != 0
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn from_u8(value: u8) -> Result<Self, TransportError> {
        if value & !Self::KNOWN != 0 {
            return Err(TransportError::UnknownFlags(value));
        }
        Ok(Self(value))
    }
}

impl Default for LinkFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix that carries a message frame over a byte stream.
///
/// Link frame layout: `[flags:1][address:2 BE][message:7+n][crc32:4 BE]`,
/// the CRC trailer present only when the flag says so. On a gateway link the
/// address is the remote node's in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkHeader {
    pub flags: LinkFlags,
    pub address: NodeAddress,
}

impl LinkHeader {
    pub const SIZE: usize = 3;

    /// Trailer size when the CRC flag is set
    pub const CRC_SIZE: usize = 4;

    pub fn new(address: NodeAddress, enable_crc: bool) -> Self {
        let mut flags = LinkFlags::new();
        if enable_crc {
            flags = flags.with_crc();
        }
        Self { flags, address }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let [high, low] = self.address.0.to_be_bytes();
        [self.flags.as_u8(), high, low]
    }

    pub fn decode(data: &[u8]) -> Result<Self, TransportError> {
        if data.len() < Self::SIZE {
            return Err(TransportError::Truncated {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }

        let flags = LinkFlags::from_u8(data[0])?;
        let address = NodeAddress(u16::from_be_bytes([data[1], data[2]]));

        Ok(Self { flags, address })
    }

    /// Total link frame size around a message frame of `frame_len` bytes
    pub fn total_size(&self, frame_len: usize) -> usize {
        Self::SIZE + frame_len + if self.flags.has_crc() { Self::CRC_SIZE } else { 0 }
    }
}
