//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default GraphQL endpoint of the messaging gateway
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030/api/graphql";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".sms-send";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "sms-send.log";

/// Helper text shown under both phone number inputs
pub const COUNTRY_CODE_HINT: &str = "Please provide your country code e.g. +1 (USA)";

/// Application name
pub const APP_NAME: &str = "SMS Send";
