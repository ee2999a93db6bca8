use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use embedded_io_adapters::tokio_1::FromTokio;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

use sensornet_api::{
    AsyncLinkTransport, Command, InformationType, Message, MessageHeader, NodeAddress, SensorType,
    SystemMessageType, TransportError,
};

use crate::error::MockError;
use crate::settings;

/// Last reported state of every sensor seen by the gateway
#[derive(Debug, Default)]
pub struct SensorStore {
    presentations: HashMap<(NodeAddress, u8), SensorType>,
    readings: HashMap<(NodeAddress, u8, InformationType), Message>,
}

impl SensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, node: NodeAddress, message: &Message) {
        match message.command() {
            Command::Presentation => {
                self.presentations
                    .insert((node, message.sensor_id()), message.sensor_type());
            }
            Command::Set => {
                let key = (node, message.sensor_id(), message.information_type());
                self.readings.insert(key, message.clone());
            }
            _ => {}
        }
    }

    pub fn presented(&self, node: NodeAddress, sensor_id: u8) -> Option<SensorType> {
        self.presentations.get(&(node, sensor_id)).copied()
    }

    pub fn latest(
        &self,
        node: NodeAddress,
        sensor_id: u8,
        information_type: InformationType,
    ) -> Option<&Message> {
        self.readings.get(&(node, sensor_id, information_type))
    }

    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }
}

#[derive(Serialize)]
struct MessageReport<'a> {
    received_at: i64,
    node: NodeAddress,
    header: &'a MessageHeader,
    rendered: String,
}

pub struct Gateway {
    listener: TcpListener,
    enable_crc: bool,
    store: Arc<Mutex<SensorStore>>,
}

impl Gateway {
    pub async fn bind(settings: &settings::Gateway) -> Result<Self, MockError> {
        let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;

        Ok(Self {
            listener,
            enable_crc: settings.crc,
            store: Arc::new(Mutex::new(SensorStore::new())),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, MockError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn store(&self) -> Arc<Mutex<SensorStore>> {
        self.store.clone()
    }

    pub async fn serve(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let store = self.store.clone();
                    let enable_crc = self.enable_crc;
                    tokio::spawn(async move {
                        Self::handle_connection(stream, addr, store, enable_crc).await;
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to accept TCP connection: {}", e);
                }
            }
        }
    }

    async fn handle_connection(
        stream: TcpStream,
        addr: SocketAddr,
        store: Arc<Mutex<SensorStore>>,
        enable_crc: bool,
    ) {
        let mut transport = AsyncLinkTransport::new(FromTokio::new(stream)).with_crc(enable_crc);
        tracing::info!("Connection accepted from {}", addr);

        loop {
            let (node, message) = match transport.receive_message().await {
                Ok(received) => received,
                Err(TransportError::Io(e)) => {
                    tracing::info!("Connection from {} closed: {}", addr, e);
                    break;
                }
                Err(e) => {
                    tracing::warn!("Dropped frame from {}: {}", addr, e);
                    continue;
                }
            };

            tracing::info!("node {} -> {}", node, message);
            match report(node, &message) {
                Ok(line) => tracing::debug!("{}", line),
                Err(e) => tracing::warn!("Failed to serialize report: {}", e),
            }

            let reply = {
                let mut store = store.lock().await;
                store.record(node, &message);
                respond(&store, node, &message)
            };

            if let Some(reply) = reply {
                tracing::info!("node {} <- {}", node, reply);
                if let Err(e) = transport.send_message(node, &reply).await {
                    tracing::warn!("Failed to reply to node {}: {}", node, e);
                    break;
                }
            }
        }
    }
}

fn report(node: NodeAddress, message: &Message) -> Result<String, serde_json::Error> {
    let now = OffsetDateTime::now_utc();
    serde_json::to_string(&MessageReport {
        received_at: (now.unix_timestamp_nanos() / 1_000_000) as i64,
        node,
        header: message.header(),
        rendered: message.to_string(),
    })
}

/// Builds the gateway's answer to a node message, if it warrants one
fn respond(store: &SensorStore, node: NodeAddress, message: &Message) -> Option<Message> {
    match message.command() {
        Command::Req => {
            let information_type = message.information_type();
            match store.latest(node, message.sensor_id(), information_type) {
                Some(latest) => Some(latest.clone()),
                None => {
                    tracing::warn!(
                        "No {} value stored for node {} sensor {}",
                        information_type,
                        node,
                        message.sensor_id()
                    );
                    None
                }
            }
        }
        Command::Internal => match message.system_message_type() {
            SystemMessageType::Time => {
                let mut reply = Message::internal(message.sensor_id(), SystemMessageType::Time);
                reply.set_u32(OffsetDateTime::now_utc().unix_timestamp() as u32);
                Some(reply)
            }
            SystemMessageType::HeartbeatRequest => {
                let mut reply =
                    Message::internal(message.sensor_id(), SystemMessageType::HeartbeatResponse);
                reply.set_heartbeat();
                Some(reply)
            }
            _ => None,
        },
        _ => None,
    }
}
