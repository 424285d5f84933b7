//! Drawing - renders a [`RenderState`] into a frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, COUNTRY_CODE_HINT};
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;

/// Width at which the two number fields sit side by side
const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);
    draw_form(f, state, main_chunks[1]);
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.show_error_dialog {
        draw_error_dialog(f, state.error_message.as_deref().unwrap_or(""), area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" {}", state.endpoint), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(numbers_height(area.width)),
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Actions
        ])
        .split(area);

    draw_number_fields(f, state, chunks[0]);
    draw_body_field(f, state, chunks[1]);
    draw_actions(f, state, chunks[2]);
}

fn numbers_height(width: u16) -> u16 {
    // Each number field is a 3 line input plus 1 line of helper text
    if width >= WIDE_LAYOUT_MIN_WIDTH {
        4
    } else {
        8
    }
}

fn draw_number_fields(f: &mut Frame, state: &RenderState, area: Rect) {
    let direction = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let halves = Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    draw_number_field(f, state, Field::From, &state.from_number, halves[0]);
    draw_number_field(f, state, Field::To, &state.to_number, halves[1]);
}

fn border_style(state: &RenderState, field: Field) -> Style {
    let is_focused = state.active_field == field;
    if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Phone number input with a `+` prefix and helper text underneath
fn draw_number_field(f: &mut Frame, state: &RenderState, field: Field, value: &str, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state, field))
        .title(format!(" {} ", field.label()));

    // Digits are ASCII, so byte offsets are columns. Scroll so the cursor stays visible.
    let is_editing = state.active_field == field && state.input_mode == InputMode::Editing;
    let visible = usize::from(parts[0].width.saturating_sub(4)).max(1);
    let cursor = state.cursor_position.min(value.len());
    let start = if is_editing { scroll_offset(cursor, visible) } else { 0 };

    let line = Line::from(vec![
        Span::styled("+ ", Style::default().fg(Color::DarkGray)),
        Span::raw(value.get(start..).unwrap_or("")),
    ]);
    f.render_widget(Paragraph::new(line).block(block), parts[0]);

    let hint = Paragraph::new(format!(" {}", COUNTRY_CODE_HINT))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, parts[1]);

    if is_editing {
        let cursor_x = parts[0].x.saturating_add(3).saturating_add(to_u16(cursor - start));
        f.set_cursor_position(Position::new(cursor_x, parts[0].y + 1));
    }
}

fn draw_body_field(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state, Field::Body))
        .title(format!(" {} ", Field::Body.label()));

    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);
    let inner_height = usize::from(area.height.saturating_sub(2)).max(1);

    let (row, col) = if state.active_field == Field::Body {
        cursor_row_col(&state.body, state.cursor_position)
    } else {
        (0, 0)
    };
    let scroll_y = to_u16(scroll_offset(row, inner_height));
    let scroll_x = to_u16(scroll_offset(col, inner_width));

    let body = Paragraph::new(state.body.as_str())
        .block(block)
        .scroll((scroll_y, scroll_x));
    f.render_widget(body, area);

    if state.active_field == Field::Body && state.input_mode == InputMode::Editing {
        let rel_x = to_u16(col.saturating_sub(usize::from(scroll_x)).min(inner_width - 1));
        let rel_y = to_u16(row.saturating_sub(usize::from(scroll_y)).min(inner_height - 1));
        let cursor_x = area.x.saturating_add(1).saturating_add(rel_x);
        let cursor_y = area.y.saturating_add(1).saturating_add(rel_y);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// First visible index so that `pos` fits in a window of `visible` cells
fn scroll_offset(pos: usize, visible: usize) -> usize {
    pos.saturating_sub(visible.saturating_sub(1))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Row and column (in chars) of a byte cursor in multi-line text
pub fn cursor_row_col(text: &str, cursor: usize) -> (usize, usize) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (row, before[line_start..].chars().count())
}

/// Send button plus the provider link after a successful send
fn draw_actions(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let mut spans = if state.is_sending {
        vec![Span::styled(
            " [ Sending... ] ",
            Style::default().fg(Color::Black).bg(Color::DarkGray).bold(),
        )]
    } else {
        vec![Span::styled(
            " [ Send ] ",
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )]
    };

    if let Some(sent) = &state.sent {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Open in Twilio ↗ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            sent.result.provider_url.clone(),
            Style::default().fg(Color::Cyan).underlined(),
        ));
        spans.push(Span::styled(
            format!(
                "  ({} at {}, {}ms)",
                sent.result.id,
                sent.sent_at.format("%H:%M:%S"),
                sent.time_ms
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_sending {
        " Sending... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Tab:next field | Ctrl+S:send "
    } else {
        " Tab:field | e:edit | s:send | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_error_dialog(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" An error occurred ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " [ Okay ] ",
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));

    let dialog = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(dialog, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 SMS SEND - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch fields
   e / Enter          Edit current field

 EDITING
   Esc                Stop editing
   Enter              New line (Body) / stop editing (numbers)
   Ctrl+S             Send from anywhere

 SEND
   s                  Send test message

 ERROR DIALOG
   Enter / Esc / o    Okay

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SendResult, SentMessage};
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_with_cursor(state: &RenderState, width: u16, height: u16) -> (String, Position) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (render(state, width, height), cursor)
    }

    fn base_state() -> RenderState {
        RenderState {
            endpoint: "http://gw/graphql".into(),
            from_number: "1234567890".into(),
            ..RenderState::default()
        }
    }

    #[test]
    fn test_form_surface() {
        let screen = render(&base_state(), 100, 24);
        assert!(screen.contains("From Number"));
        assert!(screen.contains("To Number"));
        assert!(screen.contains("+ 1234567890"));
        assert!(screen.contains(COUNTRY_CODE_HINT));
        assert!(screen.contains("Body"));
        assert!(screen.contains("[ Send ]"));
        assert!(!screen.contains("Open in Twilio"));
        assert!(!screen.contains("An error occurred"));
    }

    #[test]
    fn test_narrow_layout_stacks_number_fields() {
        let screen = render(&base_state(), 60, 24);
        assert!(screen.contains("From Number"));
        assert!(screen.contains("To Number"));
        assert_eq!(screen.matches(COUNTRY_CODE_HINT).count(), 2);
    }

    #[test]
    fn test_link_after_success() {
        let state = RenderState {
            sent: Some(SentMessage {
                result: SendResult {
                    id: "SM1".into(),
                    provider_url: "https://example/SM1".into(),
                },
                sent_at: chrono::Local::now(),
                time_ms: 42,
            }),
            ..base_state()
        };
        let screen = render(&state, 120, 24);
        assert!(screen.contains("Open in Twilio"));
        assert!(screen.contains("https://example/SM1"));
        assert!(!screen.contains("An error occurred"));
    }

    #[test]
    fn test_sending_indicator() {
        let state = RenderState { is_sending: true, ..base_state() };
        let screen = render(&state, 100, 24);
        assert!(screen.contains("[ Sending... ]"));
    }

    #[test]
    fn test_error_dialog() {
        let state = RenderState {
            show_error_dialog: true,
            error_message: Some("Invalid number".into()),
            ..base_state()
        };
        let screen = render(&state, 100, 30);
        assert!(screen.contains("An error occurred"));
        assert!(screen.contains("Invalid number"));
        assert!(screen.contains("[ Okay ]"));
    }

    #[test]
    fn test_long_body_line_keeps_cursor_in_box() {
        let body = "a".repeat(70_000);
        let state = RenderState {
            cursor_position: 65_535,
            body,
            active_field: Field::Body,
            input_mode: InputMode::Editing,
            ..base_state()
        };
        let (screen, cursor) = render_with_cursor(&state, 100, 24);
        assert!(screen.contains("aaaaaaaaaa"));
        assert!(cursor.x < 99);
        assert!(cursor.y < 23);
    }

    #[test]
    fn test_long_number_scrolls_to_cursor() {
        let mut from_number = "1".repeat(69_990);
        from_number.push_str("2345678909");
        let state = RenderState {
            cursor_position: from_number.len(),
            from_number,
            active_field: Field::From,
            input_mode: InputMode::Editing,
            ..base_state()
        };
        let (screen, cursor) = render_with_cursor(&state, 100, 24);
        assert!(screen.contains("2345678909"));
        assert!(cursor.x < 50);
        assert_eq!(cursor.y, 2);
    }

    #[test]
    fn test_long_number_middle_cursor_does_not_overflow() {
        let state = RenderState {
            cursor_position: 65_534,
            from_number: "9".repeat(70_000),
            active_field: Field::From,
            input_mode: InputMode::Editing,
            ..base_state()
        };
        let (_, cursor) = render_with_cursor(&state, 100, 24);
        assert!(cursor.x < 50);
    }

    #[test]
    fn test_body_scrolls_to_last_line() {
        let body = (1..=30)
            .map(|i| format!("row-{:02}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let state = RenderState {
            cursor_position: body.len(),
            body,
            active_field: Field::Body,
            input_mode: InputMode::Editing,
            ..base_state()
        };
        let (screen, cursor) = render_with_cursor(&state, 100, 24);
        assert!(screen.contains("row-30"));
        assert!(!screen.contains("row-01"));
        // Cursor sits just after "row-30" on the last inner row of the body box
        let cursor_line = screen.lines().nth(usize::from(cursor.y)).unwrap();
        assert!(cursor_line.contains("row-30"));
    }

    #[test]
    fn test_unfocused_body_shows_top() {
        let body = (1..=30)
            .map(|i| format!("row-{:02}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let state = RenderState { body, ..base_state() };
        let screen = render(&state, 100, 24);
        assert!(screen.contains("row-01"));
        assert!(!screen.contains("row-30"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(70_000, 1), 70_000);
        assert_eq!(to_u16(70_000), u16::MAX);
    }

    #[test]
    fn test_cursor_row_col() {
        assert_eq!(cursor_row_col("", 0), (0, 0));
        assert_eq!(cursor_row_col("abc", 2), (0, 2));
        assert_eq!(cursor_row_col("ab\ncé", 6), (1, 2));
        assert_eq!(cursor_row_col("ab\n", 3), (1, 0));
    }
}
