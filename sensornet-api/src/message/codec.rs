use core::fmt;

use alloc::vec::Vec;

use super::command::Command;
use super::error::{MessageError, Result};
use super::header::MessageHeader;
use super::information::InformationType;
use super::internal::SystemMessageType;
use super::payload::{PayloadType, PayloadValue};
use super::sensor::SensorType;
use super::stream::StreamType;
use crate::{HEADER_SIZE, MAX_PAYLOAD_SIZE};

/// One wire message: a header plus its bounded payload buffer.
///
/// Bytes past `payload_size` are unspecified and may be stale from an
/// earlier payload; nothing reads them.
#[derive(Clone)]
pub struct Message {
    header: MessageHeader,
    payload: [u8; MAX_PAYLOAD_SIZE],
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    pub fn new() -> Self {
        Self {
            header: MessageHeader::new(),
            payload: [0; MAX_PAYLOAD_SIZE],
        }
    }

    pub fn from_header(header: MessageHeader) -> Self {
        Self {
            header,
            payload: [0; MAX_PAYLOAD_SIZE],
        }
    }

    /// Presentation of a sensor attached to this node
    pub fn presentation(sensor_id: u8, sensor_type: SensorType) -> Self {
        let mut message = Self::new();
        message.set_sensor_id(sensor_id);
        message.set_command(Command::Presentation);
        message.set_sensor_type(sensor_type);
        message
    }

    /// Value update; the payload is set afterwards with a typed setter
    pub fn set(sensor_id: u8, information_type: InformationType) -> Self {
        let mut message = Self::new();
        message.set_sensor_id(sensor_id);
        message.set_command(Command::Set);
        message.set_information_type(information_type);
        message
    }

    pub fn request(sensor_id: u8, information_type: InformationType) -> Self {
        let mut message = Self::new();
        message.set_sensor_id(sensor_id);
        message.set_command(Command::Req);
        message.set_information_type(information_type);
        message
    }

    pub fn internal(sensor_id: u8, system_message_type: SystemMessageType) -> Self {
        let mut message = Self::new();
        message.set_sensor_id(sensor_id);
        message.set_command(Command::Internal);
        message.set_system_message_type(system_message_type);
        message
    }

    pub fn stream(sensor_id: u8, stream_type: StreamType) -> Self {
        let mut message = Self::new();
        message.set_sensor_id(sensor_id);
        message.set_command(Command::Stream);
        message.set_stream_type(stream_type);
        message
    }

    pub fn with_sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.set_sensor_type(sensor_type);
        self
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn sensor_id(&self) -> u8 {
        self.header.sensor_id()
    }

    pub fn set_sensor_id(&mut self, id: u8) {
        self.header.set_sensor_id(id);
    }

    pub fn command(&self) -> Command {
        self.header.command()
    }

    pub fn set_command(&mut self, command: Command) {
        self.header.set_command(command);
    }

    pub fn sensor_type(&self) -> SensorType {
        self.header.sensor_type()
    }

    pub fn set_sensor_type(&mut self, sensor_type: SensorType) {
        self.header.set_sensor_type(sensor_type);
    }

    pub fn information_type(&self) -> InformationType {
        self.header.information_type()
    }

    pub fn set_information_type(&mut self, information_type: InformationType) {
        self.header.set_information_type(information_type);
    }

    pub fn system_message_type(&self) -> SystemMessageType {
        self.header.system_message_type()
    }

    pub fn set_system_message_type(&mut self, system_message_type: SystemMessageType) {
        self.header.set_system_message_type(system_message_type);
    }

    pub fn stream_type(&self) -> Result<StreamType> {
        self.header.stream_type()
    }

    pub fn set_stream_type(&mut self, stream_type: StreamType) {
        self.header.set_stream_type(stream_type);
    }

    pub fn payload_type(&self) -> PayloadType {
        self.header.payload_type()
    }

    pub fn set_payload_type(&mut self, payload_type: PayloadType) {
        self.header.set_payload_type(payload_type);
    }

    pub fn payload_size(&self) -> usize {
        self.header.payload_size()
    }

    /// Only the header changes; buffer contents are left as they are
    pub fn set_payload_size(&mut self, size: usize) -> Result<()> {
        self.header.set_payload_size(size)
    }

    /// Meaningful payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.payload_size()]
    }

    /// Whole payload buffer, for callers filling raw bytes before
    /// declaring the size with [`Message::set_payload_size`]
    pub fn payload_buffer_mut(&mut self) -> &mut [u8; MAX_PAYLOAD_SIZE] {
        &mut self.payload
    }

    fn store(&mut self, payload_type: PayloadType, bytes: &[u8]) -> Result<()> {
        if bytes.len() > MAX_PAYLOAD_SIZE {
            return Err(MessageError::PayloadTooLarge(bytes.len()));
        }
        self.payload[..bytes.len()].copy_from_slice(bytes);
        self.header.set_payload_size(bytes.len())?;
        self.header.set_payload_type(payload_type);
        Ok(())
    }

    /// Stores text; the NUL terminator is written when it fits but never counted
    pub fn set_string(&mut self, text: &str) -> Result<()> {
        self.store(PayloadType::String, text.as_bytes())?;
        if text.len() < MAX_PAYLOAD_SIZE {
            self.payload[text.len()] = 0;
        }
        Ok(())
    }

    pub fn set_byte(&mut self, value: u8) {
        self.store_fixed(PayloadType::Byte, &[value]);
    }

    pub fn set_i16(&mut self, value: i16) {
        self.store_fixed(PayloadType::Int16, &value.to_le_bytes());
    }

    pub fn set_u16(&mut self, value: u16) {
        self.store_fixed(PayloadType::UInt16, &value.to_le_bytes());
    }

    pub fn set_i32(&mut self, value: i32) {
        self.store_fixed(PayloadType::Long32, &value.to_le_bytes());
    }

    pub fn set_u32(&mut self, value: u32) {
        self.store_fixed(PayloadType::ULong32, &value.to_le_bytes());
    }

    pub fn set_f32(&mut self, value: f32) {
        self.store_fixed(PayloadType::Float32, &value.to_le_bytes());
    }

    pub fn set_custom(&mut self, bytes: &[u8]) -> Result<()> {
        self.store(PayloadType::Custom, bytes)
    }

    pub fn set_heartbeat(&mut self) {
        self.store_fixed(PayloadType::Heartbeat, &[]);
    }

    pub fn set_value(&mut self, value: PayloadValue<'_>) -> Result<()> {
        match value {
            PayloadValue::Str(text) => self.set_string(text)?,
            PayloadValue::Byte(v) => self.set_byte(v),
            PayloadValue::Int16(v) => self.set_i16(v),
            PayloadValue::UInt16(v) => self.set_u16(v),
            PayloadValue::Long32(v) => self.set_i32(v),
            PayloadValue::ULong32(v) => self.set_u32(v),
            PayloadValue::Custom(bytes) => self.set_custom(bytes)?,
            PayloadValue::Float32(v) => self.set_f32(v),
            PayloadValue::Heartbeat => self.set_heartbeat(),
        }
        Ok(())
    }

    // Fixed-width payloads are at most four bytes and always fit.
    fn store_fixed(&mut self, payload_type: PayloadType, bytes: &[u8]) {
        self.payload[..bytes.len()].copy_from_slice(bytes);
        self.header.set_payload_type(payload_type);
        self.header.set_fixed_payload_size(bytes.len() as u8);
    }

    fn expect_type(&self, expected: PayloadType) -> Result<()> {
        let actual = self.payload_type();
        if actual != expected {
            return Err(MessageError::PayloadTypeMismatch { expected, actual });
        }
        Ok(())
    }

    fn fixed<const N: usize>(&self, expected: PayloadType) -> Result<[u8; N]> {
        self.expect_type(expected)?;
        if self.payload_size() != N {
            return Err(MessageError::PayloadSizeMismatch {
                payload_type: expected,
                expected: N,
                actual: self.payload_size(),
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.payload[..N]);
        Ok(bytes)
    }

    /// Text up to the first NUL or the end of the payload
    pub fn get_str(&self) -> Result<&str> {
        self.expect_type(PayloadType::String)?;
        let bytes = self.payload();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        core::str::from_utf8(&bytes[..end]).map_err(|_| MessageError::InvalidUtf8)
    }

    pub fn get_byte(&self) -> Result<u8> {
        self.fixed::<1>(PayloadType::Byte).map(|b| b[0])
    }

    pub fn get_i16(&self) -> Result<i16> {
        self.fixed(PayloadType::Int16).map(i16::from_le_bytes)
    }

    pub fn get_u16(&self) -> Result<u16> {
        self.fixed(PayloadType::UInt16).map(u16::from_le_bytes)
    }

    pub fn get_i32(&self) -> Result<i32> {
        self.fixed(PayloadType::Long32).map(i32::from_le_bytes)
    }

    pub fn get_u32(&self) -> Result<u32> {
        self.fixed(PayloadType::ULong32).map(u32::from_le_bytes)
    }

    pub fn get_f32(&self) -> Result<f32> {
        self.fixed(PayloadType::Float32).map(f32::from_le_bytes)
    }

    pub fn get_custom(&self) -> Result<&[u8]> {
        self.expect_type(PayloadType::Custom)?;
        Ok(self.payload())
    }

    /// Payload decoded according to its declared type
    pub fn value(&self) -> Result<PayloadValue<'_>> {
        Ok(match self.payload_type() {
            PayloadType::String => PayloadValue::Str(self.get_str()?),
            PayloadType::Byte => PayloadValue::Byte(self.get_byte()?),
            PayloadType::Int16 => PayloadValue::Int16(self.get_i16()?),
            PayloadType::UInt16 => PayloadValue::UInt16(self.get_u16()?),
            PayloadType::Long32 => PayloadValue::Long32(self.get_i32()?),
            PayloadType::ULong32 => PayloadValue::ULong32(self.get_u32()?),
            PayloadType::Custom => PayloadValue::Custom(self.get_custom()?),
            PayloadType::Float32 => PayloadValue::Float32(self.get_f32()?),
            PayloadType::Heartbeat => {
                self.fixed::<0>(PayloadType::Heartbeat)?;
                PayloadValue::Heartbeat
            }
        })
    }

    /// Encoded length: header plus the meaningful payload bytes
    pub fn frame_len(&self) -> usize {
        HEADER_SIZE + self.payload_size()
    }

    /// Writes the frame into `buffer`, returns the number of bytes written
    pub fn encode_into(&self, buffer: &mut [u8]) -> Result<usize> {
        let len = self.frame_len();
        if buffer.len() < len {
            return Err(MessageError::BufferTooSmall {
                required: len,
                available: buffer.len(),
            });
        }
        buffer[..HEADER_SIZE].copy_from_slice(&self.header.encode());
        buffer[HEADER_SIZE..len].copy_from_slice(self.payload());
        Ok(len)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(self.frame_len());
        frame.extend_from_slice(&self.header.encode());
        frame.extend_from_slice(self.payload());
        frame
    }

    /// Decodes one frame, returns (message, bytes_consumed).
    ///
    /// Only the advertised `7 + payload_size` bytes are required; anything
    /// after them is left for the caller.
    pub fn decode(data: &[u8]) -> Result<(Self, usize)> {
        let header = MessageHeader::decode(data)?;
        let len = HEADER_SIZE + header.payload_size();
        if data.len() < len {
            return Err(MessageError::FrameTooShort {
                expected: len,
                actual: data.len(),
            });
        }

        let mut message = Self::from_header(header);
        message.payload[..header.payload_size()].copy_from_slice(&data[HEADER_SIZE..len]);

        Ok((message, len))
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.payload() == other.payload()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("header", &self.header)
            .field("payload", &self.payload())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::MAX_FRAME_SIZE;

    #[test]
    fn test_set_payload_size_keeps_buffer() {
        let mut message = Message::new();
        message.set_custom(&[1, 2, 3, 4]).unwrap();

        message.set_payload_size(2).unwrap();
        assert_eq!(message.payload(), &[1, 2]);

        message.set_payload_size(4).unwrap();
        assert_eq!(message.payload(), &[1, 2, 3, 4]);

        assert_eq!(
            message.set_payload_size(138),
            Err(MessageError::PayloadTooLarge(138))
        );
        assert_eq!(message.payload_size(), 4);
    }

    #[test]
    fn test_temperature_roundtrip() {
        let mut message = Message::set(7, InformationType::Temp).with_sensor_type(SensorType::Temp);
        message.set_f32(21.5);

        let frame = message.encode();
        assert_eq!(frame.len(), HEADER_SIZE + 4);

        let (decoded, consumed) = Message::decode(&frame).unwrap();
        assert_eq!(consumed, frame.len());
        assert_eq!(decoded.sensor_id(), 7);
        assert_eq!(decoded.command(), Command::Set);
        assert_eq!(decoded.sensor_type(), SensorType::Temp);
        assert_eq!(decoded.information_type(), InformationType::Temp);
        assert_eq!(decoded.payload_type(), PayloadType::Float32);
        assert_eq!(decoded.payload_size(), 4);
        assert_eq!(decoded.get_f32().unwrap(), 21.5);
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_heartbeat_is_header_only() {
        let mut message = Message::internal(0, SystemMessageType::HeartbeatResponse);
        message.set_heartbeat();

        let frame = message.encode();
        assert_eq!(frame.len(), HEADER_SIZE);

        let (decoded, _) = Message::decode(&frame).unwrap();
        assert!(decoded.payload().is_empty());
        assert_eq!(decoded.value().unwrap(), PayloadValue::Heartbeat);
    }

    #[test]
    fn test_full_string_payload_fills_frame() {
        let text = "x".repeat(MAX_PAYLOAD_SIZE);
        let mut message = Message::set(1, InformationType::Text);
        message.set_string(&text).unwrap();

        let frame = message.encode();
        assert_eq!(frame.len(), MAX_FRAME_SIZE);

        let (decoded, _) = Message::decode(&frame).unwrap();
        assert_eq!(decoded.payload_size(), MAX_PAYLOAD_SIZE);
        assert_eq!(decoded.get_str().unwrap(), text);
    }

    #[test]
    fn test_oversized_string_leaves_message_unchanged() {
        let mut message = Message::set(1, InformationType::Text);
        message.set_u16(512);

        let text = "y".repeat(MAX_PAYLOAD_SIZE + 1);
        assert_eq!(
            message.set_string(&text),
            Err(MessageError::PayloadTooLarge(MAX_PAYLOAD_SIZE + 1))
        );
        assert_eq!(message.payload_type(), PayloadType::UInt16);
        assert_eq!(message.get_u16().unwrap(), 512);
    }

    #[test]
    fn test_string_stops_at_nul() {
        let mut message = Message::new();
        message.set_custom(b"on\0garbage").unwrap();
        message.set_payload_type(PayloadType::String);
        assert_eq!(message.get_str().unwrap(), "on");
    }

    #[test]
    fn test_typed_values() {
        let mut message = Message::set(3, InformationType::Watt);

        message.set_byte(200);
        assert_eq!(message.get_byte().unwrap(), 200);

        message.set_i16(-1234);
        assert_eq!(message.get_i16().unwrap(), -1234);
        assert_eq!(message.payload(), &(-1234i16).to_le_bytes());

        message.set_u16(65000);
        assert_eq!(message.get_u16().unwrap(), 65000);

        message.set_i32(-70000);
        assert_eq!(message.get_i32().unwrap(), -70000);

        message.set_u32(4_000_000_000);
        assert_eq!(message.get_u32().unwrap(), 4_000_000_000);

        message.set_value(PayloadValue::Custom(&[0xDE, 0xAD])).unwrap();
        assert_eq!(message.get_custom().unwrap(), &[0xDE, 0xAD]);
        assert_eq!(message.value().unwrap(), PayloadValue::Custom(&[0xDE, 0xAD]));
    }

    #[test]
    fn test_getter_type_mismatch() {
        let mut message = Message::set(1, InformationType::Hum);
        message.set_f32(55.0);

        assert_eq!(
            message.get_i32(),
            Err(MessageError::PayloadTypeMismatch {
                expected: PayloadType::Long32,
                actual: PayloadType::Float32,
            })
        );
        assert!(message.get_str().is_err());
    }

    #[test]
    fn test_getter_size_mismatch() {
        let mut message = Message::new();
        message.set_custom(&[1, 2, 3]).unwrap();
        message.set_payload_type(PayloadType::Float32);

        assert_eq!(
            message.get_f32(),
            Err(MessageError::PayloadSizeMismatch {
                payload_type: PayloadType::Float32,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_decode_truncated_frame() {
        let mut message = Message::set(1, InformationType::Text);
        message.set_string("hello").unwrap();
        let frame = message.encode();

        assert_eq!(
            Message::decode(&frame[..frame.len() - 1]),
            Err(MessageError::FrameTooShort {
                expected: frame.len(),
                actual: frame.len() - 1,
            })
        );
    }

    #[test]
    fn test_decode_leaves_trailing_bytes() {
        let mut first = Message::set(1, InformationType::Status);
        first.set_byte(1);
        let mut second = Message::set(2, InformationType::Status);
        second.set_byte(0);

        let mut data = first.encode();
        data.extend_from_slice(&second.encode());

        let (decoded, consumed) = Message::decode(&data).unwrap();
        assert_eq!(decoded, first);
        let (decoded, _) = Message::decode(&data[consumed..]).unwrap();
        assert_eq!(decoded, second);
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_alias_encodes_identically() {
        let pairs = [
            (InformationType::LIGHT, InformationType::Status),
            (InformationType::DIMMER, InformationType::Percentage),
            (InformationType::HEATER, InformationType::HvacFlowState),
        ];
        for (deprecated, canonical) in pairs {
            let mut old = Message::set(4, deprecated);
            old.set_byte(1);
            let mut new = Message::set(4, canonical);
            new.set_byte(1);

            assert_eq!(old.encode(), new.encode());
            let (decoded, _) = Message::decode(&old.encode()).unwrap();
            assert_eq!(decoded.information_type(), canonical);
        }
    }

    #[test]
    fn test_encode_into_buffer() {
        let mut message = Message::request(9, InformationType::Status);
        message.set_byte(1);

        let mut small = [0u8; 4];
        assert_eq!(
            message.encode_into(&mut small),
            Err(MessageError::BufferTooSmall {
                required: 8,
                available: 4
            })
        );

        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = message.encode_into(&mut buffer).unwrap();
        assert_eq!(&buffer[..len], message.encode().as_slice());
        assert_eq!(&buffer[..len], vec![9, 2, 0, 2, 0, 1, 1, 1].as_slice());
    }

    #[test]
    fn test_stream_builder() {
        let mut message = Message::stream(0, StreamType::FirmwareRequest);
        message.set_custom(&[0x01, 0x00, 0x02, 0x00]).unwrap();

        let (decoded, _) = Message::decode(&message.encode()).unwrap();
        assert_eq!(decoded.command(), Command::Stream);
        assert_eq!(decoded.stream_type().unwrap(), StreamType::FirmwareRequest);
    }
}
