#[macro_use]
mod macros;

mod codec;
mod command;
mod error;
mod header;
mod information;
mod internal;
mod payload;
mod render;
mod sensor;
mod stream;

pub use codec::Message;
pub use command::Command;
pub use error::{MessageError, Result};
pub use header::MessageHeader;
pub use information::InformationType;
pub use internal::SystemMessageType;
pub use payload::{PayloadType, PayloadValue};
pub use sensor::SensorType;
pub use stream::StreamType;
