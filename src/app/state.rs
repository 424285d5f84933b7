//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;
use crate::models::{number_to_digits, SentMessage};

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Gateway endpoint, for display only
    pub endpoint: String,

    // Form fields. Both numbers hold digits only.
    pub from_number: String,
    pub to_number: String,
    pub body: String,

    // UI state
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Send state
    pub is_sending: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub sent: Option<SentMessage>,

    // Error dialog. Dismissing hides it but keeps the message.
    pub error_message: Option<String>,
    pub show_error_dialog: bool,

    pub show_help: bool,
}

impl AppState {
    /// Seed the form from the configured default sender number
    pub fn new(default_from_number: &str) -> Self {
        AppState {
            endpoint: String::new(),
            from_number: number_to_digits(default_from_number),
            to_number: String::new(),
            body: String::new(),
            active_field: Field::From,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            is_sending: false,
            next_request_id: 1,
            pending_request_id: None,
            sent: None,
            error_message: None,
            show_error_dialog: false,
            show_help: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(&config.from_number);
        state.endpoint = config.endpoint.clone();
        state
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            Field::From => &self.from_number,
            Field::To => &self.to_number,
            Field::Body => &self.body,
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_field {
            Field::From => &mut self.from_number,
            Field::To => &mut self.to_number,
            Field::Body => &mut self.body,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            endpoint: self.endpoint.clone(),
            from_number: self.from_number.clone(),
            to_number: self.to_number.clone(),
            body: self.body.clone(),
            active_field: self.active_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_sending: self.is_sending,
            sent: self.sent.clone(),
            show_error_dialog: self.show_error_dialog,
            error_message: self.error_message.clone(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_plus_from_default() {
        let state = AppState::new("+15555550100");
        assert_eq!(state.from_number, "15555550100");
        assert_eq!(state.to_number, "");
        assert_eq!(state.body, "");
        assert!(!state.show_error_dialog);
        assert!(state.sent.is_none());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            from_number: "+4420000000".into(),
            endpoint: "http://gw/graphql".into(),
            ..Config::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.from_number, "4420000000");
        assert_eq!(state.to_render_state().endpoint, "http://gw/graphql");
    }

    #[test]
    fn test_ids_increase() {
        let mut state = AppState::new("");
        assert_eq!(state.next_id(), 1);
        assert_eq!(state.next_id(), 2);
    }
}
