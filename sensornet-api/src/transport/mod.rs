pub mod crc;
pub mod error;
pub mod io;
pub mod link;

pub use crc::{Crc32, crc32};
pub use error::TransportError;
pub use io::{AsyncLinkTransport, MeshTransport, SyncLinkTransport};
pub use link::{LinkFlags, LinkHeader, NodeAddress};

/// Receive buffer capacity, a handful of maximum-size link frames
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
