//! Network actor - runs gateway requests in Tokio async runtime

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::GatewayClient;

/// Network actor that processes send commands
pub struct NetworkActor {
    gateway: GatewayClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        gateway: GatewayClient,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            gateway,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SendSms { id, input }) => {
                            let response_tx = self.response_tx.clone();
                            let gateway = self.gateway.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, endpoint = %gateway.endpoint(), to = %input.to, "Sending test SMS");
                                let start = Instant::now();
                                let result = gateway.send_sms(&input).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(result) => {
                                        tracing::info!(id, sid = %result.id, time_ms, "Test SMS sent");
                                        NetworkResponse::Sent { id, result, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, time_ms, "Test SMS failed");
                                        NetworkResponse::Failed { id, message: e.to_string(), time_ms }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
