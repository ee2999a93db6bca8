use core::fmt::Debug;

use alloc::vec::Vec;

use embedded_io::{ErrorType as SyncErrorType, Read as SyncRead, Write as SyncWrite};
use embedded_io_async::{ErrorType as AsyncErrorType, Read as AsyncRead, Write as AsyncWrite};

use crate::message::{Message, MessageHeader};
use crate::HEADER_SIZE;

use super::DEFAULT_BUFFER_SIZE;
use super::crc::crc32;
use super::error::TransportError;
use super::link::{LinkHeader, NodeAddress};

/// Node-to-node message exchange, independent of the underlying link.
pub trait MeshTransport {
    type Error;

    fn send(&mut self, destination: NodeAddress, message: Message) -> Result<(), Self::Error>;

    fn receive(&mut self) -> Result<(NodeAddress, Message), Self::Error>;
}

#[derive(Debug)]
pub struct AsyncLinkTransport<IO> {
    io: IO,
    rx_buffer: Vec<u8>,
    enable_crc: bool,
}

#[derive(Debug)]
pub struct SyncLinkTransport<IO> {
    io: IO,
    rx_buffer: Vec<u8>,
    enable_crc: bool,
}

macro_rules! impl_transport_common {
    ($transport:ident) => {
        impl<IO> $transport<IO> {
            pub fn new(io: IO) -> Self {
                Self {
                    io,
                    rx_buffer: Vec::with_capacity(DEFAULT_BUFFER_SIZE),
                    enable_crc: true,
                }
            }

            pub fn with_crc(mut self, enable: bool) -> Self {
                self.enable_crc = enable;
                self
            }

            pub fn inner(&self) -> &IO {
                &self.io
            }

            pub fn inner_mut(&mut self) -> &mut IO {
                &mut self.io
            }

            pub fn into_inner(self) -> IO {
                self.io
            }

            pub fn is_crc_enabled(&self) -> bool {
                self.enable_crc
            }

            pub fn clear_rx_buffer(&mut self) {
                self.rx_buffer.clear();
            }

            pub fn rx_buffer_len(&self) -> usize {
                self.rx_buffer.len()
            }

            fn encode_frame(&self, destination: NodeAddress, message: &Message) -> Vec<u8> {
                let header = LinkHeader::new(destination, self.enable_crc);
                let body = message.encode();

                let mut frame = Vec::with_capacity(header.total_size(body.len()));
                frame.extend_from_slice(&header.encode());
                frame.extend_from_slice(&body);

                if self.enable_crc {
                    frame.extend_from_slice(&crc32(&body).to_be_bytes());
                }

                log::debug!(
                    "Sending {} byte frame to node {}: {}",
                    frame.len(),
                    destination,
                    message
                );
                frame
            }

            /// Size of the link frame at the head of the receive buffer.
            ///
            /// Needs at least the link header and the message header buffered.
            /// A malformed header leaves no way to resynchronise, so the buffer
            /// is discarded.
            fn pending_frame_size(&mut self) -> Result<(LinkHeader, usize), TransportError> {
                let decoded = LinkHeader::decode(&self.rx_buffer).and_then(|link| {
                    let header = MessageHeader::decode(&self.rx_buffer[LinkHeader::SIZE..])?;
                    Ok((link, header))
                });

                match decoded {
                    Ok((link, header)) => {
                        Ok((link, link.total_size(HEADER_SIZE + header.payload_size())))
                    }
                    Err(e) => {
                        log::warn!(
                            "Dropping {} buffered bytes after bad header: {}",
                            self.rx_buffer.len(),
                            e
                        );
                        self.rx_buffer.clear();
                        Err(e)
                    }
                }
            }

            /// Validates and removes one complete frame from the receive buffer
            fn take_frame(
                &mut self,
                link: LinkHeader,
                total_frame_size: usize,
            ) -> Result<(NodeAddress, Message), TransportError> {
                let body_end = if link.flags.has_crc() {
                    total_frame_size - LinkHeader::CRC_SIZE
                } else {
                    total_frame_size
                };
                let body = &self.rx_buffer[LinkHeader::SIZE..body_end];

                if link.flags.has_crc() {
                    let expected_crc = u32::from_be_bytes([
                        self.rx_buffer[body_end],
                        self.rx_buffer[body_end + 1],
                        self.rx_buffer[body_end + 2],
                        self.rx_buffer[body_end + 3],
                    ]);
                    let actual_crc = crc32(body);
                    if expected_crc != actual_crc {
                        log::warn!(
                            "CRC mismatch from node {}: expected {:#010x}, got {:#010x}",
                            link.address,
                            expected_crc,
                            actual_crc
                        );
                        self.rx_buffer.drain(..total_frame_size);
                        return Err(TransportError::CrcMismatch);
                    }
                }

                let result = Message::decode(body);
                self.rx_buffer.drain(..total_frame_size);
                let (message, _) = result?;

                log::debug!("Received frame from node {}: {}", link.address, message);
                Ok((link.address, message))
            }
        }
    };
}

impl_transport_common!(AsyncLinkTransport);
impl_transport_common!(SyncLinkTransport);

impl<IO> AsyncLinkTransport<IO>
where
    IO: AsyncRead + AsyncWrite + AsyncErrorType,
    IO::Error: Debug,
{
    pub async fn send_message(
        &mut self,
        destination: NodeAddress,
        message: &Message,
    ) -> Result<(), TransportError> {
        let frame = self.encode_frame(destination, message);

        self.io
            .write_all(&frame)
            .await
            .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;
        self.io
            .flush()
            .await
            .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;

        Ok(())
    }

    pub async fn receive_message(&mut self) -> Result<(NodeAddress, Message), TransportError> {
        self.ensure_buffer_has_async(LinkHeader::SIZE + HEADER_SIZE)
            .await?;
        let (link, total_frame_size) = self.pending_frame_size()?;

        self.ensure_buffer_has_async(total_frame_size).await?;
        self.take_frame(link, total_frame_size)
    }

    async fn ensure_buffer_has_async(&mut self, required: usize) -> Result<(), TransportError> {
        while self.rx_buffer.len() < required {
            let mut temp_buf = [0u8; 256];
            let n = self
                .io
                .read(&mut temp_buf)
                .await
                .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;
            if n == 0 {
                return Err(TransportError::Io("Unexpected EOF".into()));
            }
            self.rx_buffer.extend_from_slice(&temp_buf[..n]);
        }
        Ok(())
    }
}

impl<IO> SyncLinkTransport<IO>
where
    IO: SyncRead + SyncWrite + SyncErrorType,
    IO::Error: Debug,
{
    pub fn send_message(
        &mut self,
        destination: NodeAddress,
        message: &Message,
    ) -> Result<(), TransportError> {
        let frame = self.encode_frame(destination, message);

        self.io
            .write_all(&frame)
            .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;
        self.io
            .flush()
            .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;

        Ok(())
    }

    pub fn receive_message(&mut self) -> Result<(NodeAddress, Message), TransportError> {
        self.ensure_buffer_has_sync(LinkHeader::SIZE + HEADER_SIZE)?;
        let (link, total_frame_size) = self.pending_frame_size()?;

        self.ensure_buffer_has_sync(total_frame_size)?;
        self.take_frame(link, total_frame_size)
    }

    fn ensure_buffer_has_sync(&mut self, required: usize) -> Result<(), TransportError> {
        while self.rx_buffer.len() < required {
            let mut temp_buf = [0u8; 256];
            let n = self
                .io
                .read(&mut temp_buf)
                .map_err(|e| TransportError::Io(alloc::format!("{:?}", e)))?;
            if n == 0 {
                return Err(TransportError::Io("Unexpected EOF".into()));
            }
            self.rx_buffer.extend_from_slice(&temp_buf[..n]);
        }
        Ok(())
    }
}

impl<IO> MeshTransport for SyncLinkTransport<IO>
where
    IO: SyncRead + SyncWrite + SyncErrorType,
    IO::Error: Debug,
{
    type Error = TransportError;

    fn send(&mut self, destination: NodeAddress, message: Message) -> Result<(), Self::Error> {
        self.send_message(destination, &message)
    }

    fn receive(&mut self) -> Result<(NodeAddress, Message), Self::Error> {
        self.receive_message()
    }
}
