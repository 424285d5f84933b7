//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{SendSmsInput, SentMessage};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    /// Insert a typed character. Number fields silently drop non-digits.
    pub fn enter_char(&mut self, c: char) {
        if self.active_field.is_numeric() && !c.is_ascii_digit() {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    /// Insert pasted text with the same filtering as typing
    pub fn paste(&mut self, text: &str) {
        let filtered: String = if self.active_field.is_numeric() {
            crate::models::digits_only(text)
        } else {
            text.replace("\r\n", "\n").replace('\r', "\n")
        };
        if filtered.is_empty() {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert_str(cursor_pos, &filtered);
            self.cursor_position = cursor_pos + filtered.len();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Sending
    // ========================

    /// The mutation input for the current form values
    pub fn send_input(&self) -> SendSmsInput {
        SendSmsInput::from_form(&self.from_number, &self.to_number, &self.body)
    }

    /// Start a send. Returns `None` while another send is still pending.
    pub fn prepare_send(&mut self) -> Option<NetworkCommand> {
        if self.is_sending {
            tracing::debug!("Send ignored, previous send still pending");
            return None;
        }

        self.is_sending = true;
        self.sent = None;
        self.error_message = None;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::SendSms {
            id,
            input: self.send_input(),
        })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping response for stale request");
            return;
        }
        self.is_sending = false;
        self.pending_request_id = None;

        match response {
            NetworkResponse::Sent { result, time_ms, .. } => {
                self.sent = Some(SentMessage {
                    result,
                    sent_at: chrono::Local::now(),
                    time_ms,
                });
            }
            NetworkResponse::Failed { message, .. } => {
                self.error_message = Some(message);
                self.show_error_dialog = true;
            }
        }
    }

    // ========================
    // Popups
    // ========================

    /// "Okay" on the error dialog. Form fields are left alone.
    pub fn dismiss_error(&mut self) {
        self.show_error_dialog = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
