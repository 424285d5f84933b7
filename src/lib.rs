//! # SMS Send TUI
//!
//! A terminal form for sending a test SMS through a messaging gateway.
//!
//! ## Features
//! - From/To phone number inputs that only accept digits
//! - Multi-line message body
//! - One GraphQL `debugSendSMS` mutation per send
//! - Link to the provider's record of the sent message
//! - Modal error dialog with the gateway's message
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{AuthType, SendResult, SendSmsInput};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{GatewayClient, GatewayError, NetworkActor};
