//! Gateway client - sends the `debugSendSMS` GraphQL mutation

use std::time::Duration;

use base64::Engine;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::models::{AuthType, SendResult, SendSmsInput};

const SEND_SMS_MUTATION: &str = r#"mutation DebugSendSMS($input: DebugSendSMSInput!) {
  debugSendSMS(input: $input) {
    id
    providerURL
  }
}"#;

/// Ways a send can fail
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Request timed out")]
    Timeout,
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Message reported by the gateway, shown verbatim
    #[error("{0}")]
    GraphQl(String),
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Connect(e)
        } else {
            GatewayError::Transport(e)
        }
    }
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<SendSmsData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct SendSmsData {
    #[serde(rename = "debugSendSMS")]
    debug_send_sms: Option<SendResult>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Client for the messaging gateway's GraphQL endpoint
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    endpoint: String,
    auth: AuthType,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            create_client(config.timeout()),
            config.endpoint.clone(),
            config.auth.clone(),
        )
    }

    pub fn with_client(client: reqwest::Client, endpoint: String, auth: AuthType) -> Self {
        GatewayClient {
            client,
            endpoint,
            auth,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message. No retries.
    pub async fn send_sms(&self, input: &SendSmsInput) -> Result<SendResult, GatewayError> {
        let payload = json!({
            "operationName": "DebugSendSMS",
            "query": SEND_SMS_MUTATION,
            "variables": { "input": input },
        });

        let mut req_builder = self.client.post(&self.endpoint).json(&payload);

        match &self.auth {
            AuthType::Bearer { token } => {
                req_builder = req_builder.header("Authorization", format!("Bearer {}", token));
            }
            AuthType::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password);
                let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
                req_builder = req_builder.header("Authorization", format!("Basic {}", encoded));
            }
            AuthType::None => {}
        }

        let resp = req_builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        parse_send_response(status, &body)
    }
}

/// Interpret the gateway's reply. GraphQL errors win over the HTTP status,
/// since servers report them with either 200 or 4xx.
pub fn parse_send_response(status: u16, body: &str) -> Result<SendResult, GatewayError> {
    let parsed = serde_json::from_str::<GraphQlResponse>(body);

    if let Ok(response) = &parsed {
        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(GatewayError::GraphQl(message));
        }
    }

    if !(200..300).contains(&status) {
        return Err(GatewayError::Status {
            status,
            body: body.trim().to_string(),
        });
    }

    match parsed {
        Ok(GraphQlResponse {
            data: Some(SendSmsData { debug_send_sms: Some(result) }),
            ..
        }) => Ok(result),
        Ok(_) => Err(GatewayError::MalformedResponse(
            "missing data.debugSendSMS".to_string(),
        )),
        Err(e) => Err(GatewayError::MalformedResponse(e.to_string())),
    }
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, ?timeout, "HTTP client builder failed, falling back to defaults without timeout");
            reqwest::Client::new()
        })
}
