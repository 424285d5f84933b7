//! Network messages - communication between App and Network layers

use crate::models::{SendResult, SendSmsInput};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Send one test message through the gateway
    SendSms {
        id: u64,
        input: SendSmsInput,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The gateway accepted the message
    Sent {
        id: u64,
        result: SendResult,
        time_ms: u64,
    },
    /// The send failed; `message` is shown to the operator as-is
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Sent { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
