use core::fmt;

use super::codec::Message;
use super::payload::PayloadValue;

/// Renders `sensor;command;type;information;payload type;payload size;payload`.
///
/// Header fields are decimal. For internal messages the information column
/// is replaced by the system message type, and the information byte is not
/// rendered. A payload that does not decode as its declared type falls back
/// to hex.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        write!(
            f,
            "{};{};{};{};{};{};",
            header.sensor_id(),
            header.command().as_u8(),
            header.sensor_type().as_u8(),
            header.subtype(),
            header.payload_type().as_u8(),
            header.payload_size(),
        )?;

        match self.value() {
            Ok(PayloadValue::Str(text)) => f.write_str(text),
            Ok(PayloadValue::Byte(v)) => write!(f, "{}", v),
            Ok(PayloadValue::Int16(v)) => write!(f, "{}", v),
            Ok(PayloadValue::UInt16(v)) => write!(f, "{}", v),
            Ok(PayloadValue::Long32(v)) => write!(f, "{}", v),
            Ok(PayloadValue::ULong32(v)) => write!(f, "{}", v),
            Ok(PayloadValue::Float32(v)) => write!(f, "{}", v),
            Ok(PayloadValue::Custom(bytes)) => write_hex(f, bytes),
            Ok(PayloadValue::Heartbeat) => Ok(()),
            Err(_) => write_hex(f, self.payload()),
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02X}", byte)?;
    }
    Ok(())
}
