//! Search prompt view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::SearchInput;

const LABEL: &str = "Search: ";
const PLACEHOLDER: &str = "Type text to search...";

/// Draws the one-row prompt and places the terminal cursor in it.
pub fn render_search_input(input: &SearchInput, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let body = if input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.text().to_string(), Style::default().fg(Color::White))
    };
    let line = Line::from(vec![Span::styled(LABEL, Style::default().fg(Color::Yellow)), body]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );

    let cursor_x = area.x + (LABEL.len() + input.cursor_width()) as u16;
    if cursor_x < area.x + area.width {
        frame.set_cursor_position((cursor_x, area.y));
    }
}
