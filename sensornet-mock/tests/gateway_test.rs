use std::net::SocketAddr;
use std::time::Duration;

use embedded_io_adapters::tokio_1::FromTokio;
use tokio::net::TcpStream;
use tokio::time;

use sensornet_api::{
    AsyncLinkTransport, InformationType, Message, NodeAddress, PayloadType, SensorType,
    SystemMessageType,
};
use sensornet_mock::gateway::Gateway;
use sensornet_mock::node;
use sensornet_mock::run_until;
use sensornet_mock::settings::{self, SensorKind, Settings};

async fn start_gateway(crc: bool) -> (SocketAddr, Gateway) {
    let gateway = Gateway::bind(&settings::Gateway {
        host: "127.0.0.1".to_string(),
        port: 0,
        crc,
    })
    .await
    .unwrap();
    let addr = gateway.local_addr().unwrap();
    (addr, gateway)
}

fn climate_node(address: u16, cycles: u32) -> settings::Node {
    settings::Node {
        address,
        sketch_name: "Climate Node".to_string(),
        sketch_version: "1.0".to_string(),
        report_interval_ms: 10,
        cycles: Some(cycles),
        sensors: vec![
            settings::Sensor {
                id: 1,
                kind: SensorKind::Temperature,
            },
            settings::Sensor {
                id: 2,
                kind: SensorKind::Light,
            },
        ],
    }
}

#[tokio::test]
async fn test_node_reports_reach_gateway() {
    let (addr, gateway) = start_gateway(true).await;
    let store = gateway.store();
    tokio::spawn(gateway.serve());

    let summary = node::run(&climate_node(7, 2), addr, true).await.unwrap();

    assert_eq!(summary.address, NodeAddress(7));
    assert_eq!(summary.readings_sent, 4);
    assert!(summary.gateway_time.unwrap() > 1_600_000_000);
    assert!(summary.echoed.unwrap().starts_with("1;1;6;0;7;4;"));

    let store = store.lock().await;
    assert_eq!(store.presented(NodeAddress(7), 1), Some(SensorType::Temp));
    assert_eq!(
        store.presented(NodeAddress(7), node::NODE_SENSOR_ID),
        Some(SensorType::ArduinoNode)
    );
    assert_eq!(store.reading_count(), 2);

    let lux = store
        .latest(NodeAddress(7), 2, InformationType::Level)
        .unwrap();
    assert_eq!(lux.payload_type(), PayloadType::UInt16);
}

#[tokio::test]
async fn test_nodes_share_gateway_without_crc() {
    let (addr, gateway) = start_gateway(false).await;
    let store = gateway.store();
    tokio::spawn(gateway.serve());

    let (one, two) = (climate_node(1, 1), climate_node(2, 3));
    let (first, second) = tokio::join!(
        node::run(&one, addr, false),
        node::run(&two, addr, false),
    );
    assert_eq!(first.unwrap().readings_sent, 2);
    assert_eq!(second.unwrap().readings_sent, 6);

    let store = store.lock().await;
    assert_eq!(store.reading_count(), 4);
}

#[tokio::test]
async fn test_gateway_answers_heartbeat_request() {
    let (addr, gateway) = start_gateway(true).await;
    tokio::spawn(gateway.serve());

    let stream = TcpStream::connect(addr).await.unwrap();
    let mut transport = AsyncLinkTransport::new(FromTokio::new(stream));

    let request = Message::internal(node::NODE_SENSOR_ID, SystemMessageType::HeartbeatRequest);
    transport.send_message(NodeAddress(9), &request).await.unwrap();

    let (from, reply) = transport.receive_message().await.unwrap();
    assert_eq!(from, NodeAddress(9));
    assert_eq!(
        reply.system_message_type(),
        SystemMessageType::HeartbeatResponse
    );
    assert_eq!(reply.payload_type(), PayloadType::Heartbeat);
    assert_eq!(reply.to_string(), "255;3;0;22;8;0;");
}

#[tokio::test]
async fn test_run_stops_endless_nodes_on_shutdown() {
    let mut endless = climate_node(3, 1);
    endless.cycles = None;

    let settings = Settings {
        logger: settings::Logger {
            level: "info".to_string(),
        },
        gateway: settings::Gateway {
            host: "127.0.0.1".to_string(),
            port: 0,
            crc: true,
        },
        nodes: vec![climate_node(4, 1), endless],
    };

    let shutdown = time::sleep(Duration::from_millis(500));
    let summaries = time::timeout(Duration::from_secs(5), run_until(&settings, shutdown))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].address, NodeAddress(4));
    assert_eq!(summaries[0].readings_sent, 2);
}
