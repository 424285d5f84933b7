//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{Field, InputMode};
use crate::models::SentMessage;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Gateway endpoint, shown in the title
    pub endpoint: String,

    // Form
    pub from_number: String,
    pub to_number: String,
    pub body: String,

    // UI state
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Send
    pub is_sending: bool,
    pub sent: Option<SentMessage>,

    // Popups
    pub show_error_dialog: bool,
    pub error_message: Option<String>,
    pub show_help: bool,
}
