#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod message;
pub mod transport;

pub use message::{
    Command, InformationType, Message, MessageError, MessageHeader, PayloadType, PayloadValue,
    SensorType, StreamType, SystemMessageType,
};
pub use transport::{
    AsyncLinkTransport, LinkFlags, LinkHeader, MeshTransport, NodeAddress, SyncLinkTransport,
    TransportError,
};

/// Hard ceiling of one radio frame in bytes
pub const MAX_FRAME_SIZE: usize = 144;

/// Fixed header: seven single-byte fields
pub const HEADER_SIZE: usize = 7;

/// Largest payload that still fits a radio frame
pub const MAX_PAYLOAD_SIZE: usize = MAX_FRAME_SIZE - HEADER_SIZE;
