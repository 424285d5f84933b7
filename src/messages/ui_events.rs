//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    /// Bracketed paste, delivered in one piece
    Paste(String),
    Backspace,
    CursorLeft,
    CursorRight,

    // Actions
    Send,
    /// "Okay" on the error dialog
    DismissError,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Form field with focus
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Field {
    #[default]
    From,
    To,
    Body,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::From => Field::To,
            Field::To => Field::Body,
            Field::Body => Field::From,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::From => Field::Body,
            Field::To => Field::From,
            Field::Body => Field::To,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::From => "From Number",
            Field::To => "To Number",
            Field::Body => "Body",
        }
    }

    /// Phone number fields only take digits
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::From | Field::To)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_field: Field,
    input_mode: InputMode,
    show_help: bool,
    show_error_dialog: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('s') if !show_error_dialog && !show_help => {
                return Some(UiEvent::Send)
            }
            _ => {}
        }
    }

    // The error dialog is modal
    if show_error_dialog {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') => Some(UiEvent::DismissError),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('s') => Some(UiEvent::Send),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Enter => {
                if active_field == Field::Body {
                    Some(UiEvent::CharInput('\n'))
                } else {
                    Some(UiEvent::StopEditing)
                }
            }
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(Field::From.next(), Field::To);
        assert_eq!(Field::Body.next(), Field::From);
        assert_eq!(Field::From.prev(), Field::Body);
        assert!(Field::To.is_numeric());
        assert!(!Field::Body.is_numeric());
    }

    #[test]
    fn test_normal_mode_keys() {
        let map = |code| key_to_ui_event(press(code), Field::From, InputMode::Normal, false, false);
        assert_eq!(map(KeyCode::Char('s')), Some(UiEvent::Send));
        assert_eq!(map(KeyCode::Char('q')), Some(UiEvent::Quit));
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::StartEditing));
        assert_eq!(map(KeyCode::Tab), Some(UiEvent::NextField));
        assert_eq!(map(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_enter_in_body_is_newline() {
        let body = key_to_ui_event(press(KeyCode::Enter), Field::Body, InputMode::Editing, false, false);
        assert_eq!(body, Some(UiEvent::CharInput('\n')));

        let to = key_to_ui_event(press(KeyCode::Enter), Field::To, InputMode::Editing, false, false);
        assert_eq!(to, Some(UiEvent::StopEditing));
    }

    #[test]
    fn test_editing_passes_characters_through() {
        // Filtering happens in the app layer, not here
        let event = key_to_ui_event(press(KeyCode::Char('q')), Field::To, InputMode::Editing, false, false);
        assert_eq!(event, Some(UiEvent::CharInput('q')));
    }

    #[test]
    fn test_error_dialog_swallows_other_keys() {
        let map = |code| key_to_ui_event(press(code), Field::From, InputMode::Editing, false, true);
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::DismissError));
        assert_eq!(map(KeyCode::Esc), Some(UiEvent::DismissError));
        assert_eq!(map(KeyCode::Char('o')), Some(UiEvent::DismissError));
        assert_eq!(map(KeyCode::Char('s')), None);

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_s, Field::From, InputMode::Normal, false, true), None);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(ctrl_s, Field::Body, InputMode::Editing, false, false),
            Some(UiEvent::Send)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(ctrl_c, Field::Body, InputMode::Editing, false, true),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let event = key_to_ui_event(press(KeyCode::Char('z')), Field::From, InputMode::Normal, true, false);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }
}
