use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::error::MockError;
use crate::gateway::Gateway;
use crate::node::NodeSummary;
use crate::settings::Settings;

pub mod error;
pub mod gateway;
pub mod node;
pub mod settings;
mod simulate;

pub async fn run(settings: &Arc<Settings>) -> Result<(), MockError> {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    let summaries = run_until(settings, ctrl_c).await?;
    tracing::info!("Stopped after {} nodes finished", summaries.len());
    Ok(())
}

/// Runs the gateway and every configured node until `shutdown` completes.
///
/// Returns the summaries of the nodes that finished before shutdown; nodes
/// still running are aborted. A gateway that stops on its own is an error.
pub async fn run_until<F>(settings: &Settings, shutdown: F) -> Result<Vec<NodeSummary>, MockError>
where
    F: Future<Output = ()>,
{
    let gateway = Gateway::bind(&settings.gateway).await?;
    let gateway_addr = gateway.local_addr()?;
    tracing::info!("Gateway listening on {}", gateway_addr);

    let mut server = tokio::spawn(gateway.serve());

    let mut nodes = JoinSet::new();
    for node_settings in settings.nodes.iter().cloned() {
        let enable_crc = settings.gateway.crc;
        nodes.spawn(async move { node::run(&node_settings, gateway_addr, enable_crc).await });
    }

    let mut summaries = Vec::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            Some(joined) = nodes.join_next(), if !nodes.is_empty() => match joined {
                Ok(Ok(summary)) => {
                    tracing::info!("Node summary: {}", serde_json::to_string(&summary)?);
                    summaries.push(summary);
                }
                Ok(Err(e)) => tracing::error!("Node failed: {}", e),
                Err(e) => tracing::error!("Node task aborted: {}", e),
            },
            result = &mut server => {
                nodes.abort_all();
                return Err(match result {
                    Ok(()) => MockError::Task("Gateway stopped unexpectedly".into()),
                    Err(e) => MockError::Task(e.to_string()),
                });
            }
            _ = &mut shutdown => {
                tracing::info!("Shutting down gateway and {} running nodes", nodes.len());
                nodes.abort_all();
                server.abort();
                return Ok(summaries);
            }
        }
    }
}
