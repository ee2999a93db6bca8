use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use embedded_io_adapters::tokio_1::FromTokio;
use serde::Serialize;
use tokio::net::TcpStream;
use tokio::time;

use sensornet_api::{
    AsyncLinkTransport, Command, Message, NodeAddress, SensorType, SystemMessageType,
};

use crate::error::MockError;
use crate::settings::{self, SensorKind};
use crate::simulate;

/// Child id a node uses for messages about itself
pub const NODE_SENSOR_ID: u8 = 255;

const REPLY_TIMEOUT_MS: u64 = 5000;

type NodeTransport = AsyncLinkTransport<FromTokio<TcpStream>>;

#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub address: NodeAddress,
    pub readings_sent: u32,
    pub gateway_time: Option<u32>,
    /// The gateway's answer to a request for the first sensor's last value
    pub echoed: Option<String>,
}

/// Runs one simulated node against the gateway until its cycles run out.
pub async fn run(
    node: &settings::Node,
    gateway: SocketAddr,
    enable_crc: bool,
) -> Result<NodeSummary, MockError> {
    let mut gateway = gateway;
    if gateway.ip().is_unspecified() {
        gateway.set_ip(Ipv4Addr::LOCALHOST.into());
    }

    let stream = TcpStream::connect(gateway).await?;
    let mut transport = AsyncLinkTransport::new(FromTokio::new(stream)).with_crc(enable_crc);
    let address = node.node_address();
    tracing::info!("Node {} connected to gateway at {}", address, gateway);

    present(&mut transport, node).await?;

    let mut summary = NodeSummary {
        address,
        readings_sent: 0,
        gateway_time: None,
        echoed: None,
    };

    transport
        .send_message(address, &Message::internal(NODE_SENSOR_ID, SystemMessageType::Time))
        .await?;
    let clock = await_reply(&mut transport, |reply| {
        reply.command() == Command::Internal
            && reply.system_message_type() == SystemMessageType::Time
    })
    .await?;
    summary.gateway_time = Some(clock.get_u32()?);
    tracing::debug!("Node {} synchronised clock: {}", address, clock);

    let period = Duration::from_millis(node.report_interval_ms.max(1));
    let mut interval = time::interval(period);
    let mut battery: u8 = 100;
    let mut cycle = 0;
    while node.cycles.is_none_or(|cycles| cycle < cycles) {
        interval.tick().await;
        let day_fraction = simulate::day_fraction(cycle);

        for sensor in &node.sensors {
            let message = reading(sensor, day_fraction);
            transport.send_message(address, &message).await?;
            summary.readings_sent += 1;
        }

        let mut level = Message::internal(NODE_SENSOR_ID, SystemMessageType::BatteryLevel);
        level.set_byte(battery);
        transport.send_message(address, &level).await?;
        battery = battery.saturating_sub(1);

        let mut heartbeat =
            Message::internal(NODE_SENSOR_ID, SystemMessageType::HeartbeatResponse);
        heartbeat.set_heartbeat();
        transport.send_message(address, &heartbeat).await?;

        cycle += 1;
    }

    if let Some(sensor) = node.sensors.first() {
        let information_type = sensor.kind.information_type();
        transport
            .send_message(address, &Message::request(sensor.id, information_type))
            .await?;
        let echoed = await_reply(&mut transport, |reply| {
            reply.command() == Command::Set
                && reply.sensor_id() == sensor.id
                && reply.information_type() == information_type
        })
        .await?;
        summary.echoed = Some(echoed.to_string());
    }

    tracing::info!("Node {} finished after {} cycles", address, cycle);
    Ok(summary)
}

async fn present(transport: &mut NodeTransport, node: &settings::Node) -> Result<(), MockError> {
    let address = node.node_address();

    let mut announce = Message::presentation(NODE_SENSOR_ID, SensorType::ArduinoNode);
    announce.set_string(env!("CARGO_PKG_VERSION"))?;
    transport.send_message(address, &announce).await?;

    let mut name = Message::internal(NODE_SENSOR_ID, SystemMessageType::SketchName);
    name.set_string(&node.sketch_name)?;
    transport.send_message(address, &name).await?;

    let mut version = Message::internal(NODE_SENSOR_ID, SystemMessageType::SketchVersion);
    version.set_string(&node.sketch_version)?;
    transport.send_message(address, &version).await?;

    for sensor in &node.sensors {
        let mut presentation = Message::presentation(sensor.id, sensor.kind.sensor_type());
        presentation.set_string(sensor.kind.description())?;
        transport.send_message(address, &presentation).await?;
    }

    Ok(())
}

fn reading(sensor: &settings::Sensor, day_fraction: f64) -> Message {
    let value = simulate::sample(sensor.kind, day_fraction);
    let mut message = Message::set(sensor.id, sensor.kind.information_type())
        .with_sensor_type(sensor.kind.sensor_type());

    match sensor.kind {
        SensorKind::Temperature | SensorKind::Humidity => message.set_f32(value as f32),
        SensorKind::Light => message.set_u16(value as u16),
    }
    message
}

/// Waits for the first message matching `accept`, skipping anything else
async fn await_reply<F>(transport: &mut NodeTransport, accept: F) -> Result<Message, MockError>
where
    F: Fn(&Message) -> bool,
{
    let wait = async {
        loop {
            let (_, message) = transport.receive_message().await?;
            if accept(&message) {
                return Ok::<_, MockError>(message);
            }
            tracing::debug!("Ignoring unsolicited message: {}", message);
        }
    };

    time::timeout(Duration::from_millis(REPLY_TIMEOUT_MS), wait)
        .await
        .map_err(|_| MockError::Timeout(REPLY_TIMEOUT_MS))?
}
