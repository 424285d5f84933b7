//! Network layer - gateway request execution
//!
//! The Network actor receives send commands and reports back how each one ended.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{GatewayClient, GatewayError};
