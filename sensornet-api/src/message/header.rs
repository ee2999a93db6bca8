use serde::Serialize;

use super::command::Command;
use super::error::{MessageError, Result};
use super::information::InformationType;
use super::internal::SystemMessageType;
use super::payload::PayloadType;
use super::sensor::SensorType;
use super::stream::StreamType;
use crate::{HEADER_SIZE, MAX_PAYLOAD_SIZE};

/// Classification metadata of one message.
///
/// All fields are always present. Only convention, driven by the command,
/// decides which subtype fields mean something; the header never checks
/// that the fields agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MessageHeader {
    sensor_id: u8,
    command: Command,
    sensor_type: SensorType,
    information_type: InformationType,
    system_message_type: SystemMessageType,
    payload_type: PayloadType,
    payload_size: u8,
}

impl MessageHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sensor_id(&self) -> u8 {
        self.sensor_id
    }

    pub fn set_sensor_id(&mut self, id: u8) {
        self.sensor_id = id;
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn set_command(&mut self, command: Command) {
        self.command = command;
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn set_sensor_type(&mut self, sensor_type: SensorType) {
        self.sensor_type = sensor_type;
    }

    pub fn information_type(&self) -> InformationType {
        self.information_type
    }

    pub fn set_information_type(&mut self, information_type: InformationType) {
        self.information_type = information_type;
    }

    pub fn system_message_type(&self) -> SystemMessageType {
        self.system_message_type
    }

    pub fn set_system_message_type(&mut self, system_message_type: SystemMessageType) {
        self.system_message_type = system_message_type;
    }

    /// Reads the information byte as a stream type
    pub fn stream_type(&self) -> Result<StreamType> {
        StreamType::from_u8(self.information_type.as_u8())
    }

    pub fn set_stream_type(&mut self, stream_type: StreamType) {
        self.information_type = stream_type.into();
    }

    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    pub fn set_payload_type(&mut self, payload_type: PayloadType) {
        self.payload_type = payload_type;
    }

    pub fn payload_size(&self) -> usize {
        self.payload_size as usize
    }

    /// Fails without touching the header when `size` exceeds the frame capacity
    pub fn set_payload_size(&mut self, size: usize) -> Result<()> {
        if size > MAX_PAYLOAD_SIZE {
            return Err(MessageError::PayloadTooLarge(size));
        }
        self.payload_size = size as u8;
        Ok(())
    }

    // Callers guarantee the size is a fixed payload width.
    pub(super) fn set_fixed_payload_size(&mut self, size: u8) {
        debug_assert!(size as usize <= MAX_PAYLOAD_SIZE);
        self.payload_size = size;
    }

    /// Subtype byte that carries meaning for the current command
    pub fn subtype(&self) -> u8 {
        match self.command {
            Command::Internal => self.system_message_type.as_u8(),
            _ => self.information_type.as_u8(),
        }
    }

    /// Encodes the seven header fields in wire order
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        [
            self.sensor_id,
            self.command.as_u8(),
            self.sensor_type.as_u8(),
            self.information_type.as_u8(),
            self.system_message_type.as_u8(),
            self.payload_type.as_u8(),
            self.payload_size,
        ]
    }

    /// Decodes a header from the first seven bytes of `data`.
    ///
    /// Any enumeration byte outside its known range aborts the decode. For
    /// stream messages the information byte must also be a stream type.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(MessageError::FrameTooShort {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let command = Command::from_u8(data[1])?;
        if command == Command::Stream {
            StreamType::from_u8(data[3])?;
        }

        let mut header = Self {
            sensor_id: data[0],
            command,
            sensor_type: SensorType::from_u8(data[2])?,
            information_type: InformationType::from_u8(data[3])?,
            system_message_type: SystemMessageType::from_u8(data[4])?,
            payload_type: PayloadType::from_u8(data[5])?,
            payload_size: 0,
        };
        header.set_payload_size(data[6] as usize)?;

        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults() {
        let header = MessageHeader::new();
        assert_eq!(header.sensor_id(), 0);
        assert_eq!(header.command(), Command::Presentation);
        assert_eq!(header.sensor_type(), SensorType::Door);
        assert_eq!(header.information_type(), InformationType::Temp);
        assert_eq!(header.system_message_type(), SystemMessageType::BatteryLevel);
        assert_eq!(header.payload_type(), PayloadType::String);
        assert_eq!(header.payload_size(), 0);
        assert_eq!(header.encode(), [0; HEADER_SIZE]);
    }

    #[test]
    fn test_enum_defaults_are_tag_zero() {
        assert_eq!(Command::default().as_u8(), 0);
        assert_eq!(SensorType::default().as_u8(), 0);
        assert_eq!(InformationType::default().as_u8(), 0);
        assert_eq!(SystemMessageType::default().as_u8(), 0);
        assert_eq!(PayloadType::default().as_u8(), 0);
        assert_eq!(StreamType::default(), StreamType::FirmwareConfigRequest);
    }

    #[test]
    fn test_payload_size_bounds() {
        let mut header = MessageHeader::new();
        for size in 0..=MAX_PAYLOAD_SIZE {
            header.set_payload_size(size).unwrap();
            assert_eq!(header.payload_size(), size);
        }

        header.set_payload_size(42).unwrap();
        for size in [MAX_PAYLOAD_SIZE + 1, 144, 255, 256, usize::MAX] {
            assert_eq!(
                header.set_payload_size(size),
                Err(MessageError::PayloadTooLarge(size))
            );
            assert_eq!(header.payload_size(), 42);
        }
    }

    #[test]
    fn test_header_encoding() {
        let mut header = MessageHeader::new();
        header.set_sensor_id(200);
        header.set_command(Command::Set);
        header.set_sensor_type(SensorType::Temp);
        header.set_information_type(InformationType::Temp);
        header.set_payload_type(PayloadType::Float32);
        header.set_payload_size(4).unwrap();

        let encoded = header.encode();
        assert_eq!(encoded, [200, 1, 6, 0, 0, 7, 4]);
        assert_eq!(MessageHeader::decode(&encoded).unwrap(), header);
    }

    #[test]
    fn test_stream_type_shares_information_byte() {
        let mut header = MessageHeader::new();
        header.set_command(Command::Stream);
        header.set_stream_type(StreamType::FirmwareResponse);

        let encoded = header.encode();
        assert_eq!(encoded[3], 3);

        let decoded = MessageHeader::decode(&encoded).unwrap();
        assert_eq!(decoded.stream_type().unwrap(), StreamType::FirmwareResponse);
    }

    #[test]
    fn test_header_decode_errors() {
        assert_eq!(
            MessageHeader::decode(&[1, 1, 6]),
            Err(MessageError::FrameTooShort {
                expected: HEADER_SIZE,
                actual: 3
            })
        );
        assert_eq!(
            MessageHeader::decode(&[0, 5, 0, 0, 0, 0, 0]),
            Err(MessageError::UnknownCommand(5))
        );
        assert_eq!(
            MessageHeader::decode(&[0, 0, 40, 0, 0, 0, 0]),
            Err(MessageError::UnknownSensorType(40))
        );
        assert_eq!(
            MessageHeader::decode(&[0, 1, 0, 57, 0, 0, 0]),
            Err(MessageError::UnknownInformationType(57))
        );
        assert_eq!(
            MessageHeader::decode(&[0, 3, 0, 0, 30, 0, 0]),
            Err(MessageError::UnknownSystemMessageType(30))
        );
        assert_eq!(
            MessageHeader::decode(&[0, 0, 0, 0, 0, 9, 0]),
            Err(MessageError::UnknownPayloadType(9))
        );
        assert_eq!(
            MessageHeader::decode(&[0, 0, 0, 0, 0, 0, 138]),
            Err(MessageError::PayloadTooLarge(138))
        );
        // Valid information type, but not a stream type
        assert_eq!(
            MessageHeader::decode(&[0, 4, 0, 10, 0, 6, 0]),
            Err(MessageError::UnknownStreamType(10))
        );
    }

    #[test]
    fn test_header_serializes_by_name() {
        let mut header = MessageHeader::new();
        header.set_sensor_id(3);
        header.set_command(Command::Internal);
        header.set_system_message_type(SystemMessageType::SketchName);

        let value = serde_json::to_value(header).unwrap();
        assert_eq!(value["sensor_id"], 3);
        assert_eq!(value["command"], "Internal");
        assert_eq!(value["system_message_type"], "SketchName");

        let parsed: SystemMessageType = serde_json::from_str("\"SketchName\"").unwrap();
        assert_eq!(parsed, SystemMessageType::SketchName);
    }

    #[test]
    fn test_subtype_follows_command() {
        let mut header = MessageHeader::new();
        header.set_information_type(InformationType::Hum);
        header.set_system_message_type(SystemMessageType::Time);

        header.set_command(Command::Set);
        assert_eq!(header.subtype(), InformationType::Hum.as_u8());

        header.set_command(Command::Internal);
        assert_eq!(header.subtype(), SystemMessageType::Time.as_u8());
    }
}
