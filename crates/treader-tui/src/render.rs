//! Pure view functions for the reader.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! mutate state or return effects.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use treader_core::{StyledLine, Tint};

use crate::compose::compose;
use crate::search::render_search_input;
use crate::state::{AppState, ViewMode};

/// Frame title shown in both views.
pub const TITLE: &str = " Production System Monitor v3.2.1 ";

/// Height of the search prompt row.
const SEARCH_HEIGHT: u16 = 1;

/// Renders the whole screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let searching = app.reader.mode.is_search();

    let constraints = if searching {
        vec![Constraint::Min(1), Constraint::Length(SEARCH_HEIGHT)]
    } else {
        vec![Constraint::Min(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left);
    let inner = block.inner(chunks[0]);

    let composed = compose(
        &app.reader,
        &app.document,
        &app.fake_lines,
        Local::now().time(),
    );
    let visible = visible_window(&composed, inner.height as usize, app.reader.mode.view());
    let lines: Vec<Line<'static>> = visible.iter().map(to_line).collect();

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    if searching && let Some(&prompt_area) = chunks.get(1) {
        render_search_input(&app.reader.search, frame, prompt_area);
    }
}

/// Lines that fit in `height` rows.
///
/// The log view keeps its newest lines (the tail) like a scrolling console.
/// The reading view keeps its head so the document rows stay put.
fn visible_window(lines: &[StyledLine], height: usize, view: ViewMode) -> &[StyledLine] {
    if lines.len() <= height {
        return lines;
    }
    match view {
        ViewMode::Camouflage => &lines[lines.len() - height..],
        ViewMode::Reading => &lines[..height],
    }
}

/// Converts a markup line into a ratatui line.
pub fn to_line(line: &StyledLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .segments()
        .into_iter()
        .map(|segment| Span::styled(segment.text, tint_style(segment.tint)))
        .collect();
    Line::from(spans)
}

/// Terminal style for a markup tint.
pub fn tint_style(tint: Tint) -> Style {
    let style = Style::default();
    match tint {
        Tint::Reset => style,
        Tint::Gray => style.fg(Color::Gray),
        Tint::White => style.fg(Color::White),
        Tint::Green => style.fg(Color::Green),
        Tint::Yellow => style.fg(Color::Yellow),
        Tint::Red => style.fg(Color::Red),
        Tint::Rgb(r, g, b) => style.fg(Color::Rgb(r, g, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line_splits_colored_runs() {
        let line = StyledLine::new("[gray]10:00:00[white] [INFO] ok");
        let rendered = to_line(&line);
        assert_eq!(rendered.spans.len(), 2);
        assert_eq!(rendered.spans[0].content, "10:00:00");
        assert_eq!(rendered.spans[0].style.fg, Some(Color::Gray));
        assert_eq!(rendered.spans[1].content, " [INFO] ok");
        assert_eq!(rendered.spans[1].style.fg, Some(Color::White));
    }

    #[test]
    fn test_rgb_tint_maps_to_true_color() {
        assert_eq!(
            tint_style(Tint::Rgb(0x30, 0x30, 0x30)).fg,
            Some(Color::Rgb(0x30, 0x30, 0x30))
        );
        assert_eq!(tint_style(Tint::Reset).fg, None);
    }

    #[test]
    fn test_visible_window_keeps_log_tail_and_reading_head() {
        let lines: Vec<StyledLine> = (0..5).map(|i| StyledLine::new(i.to_string())).collect();
        let tail = visible_window(&lines, 2, ViewMode::Camouflage);
        assert_eq!(tail[0].as_str(), "3");
        let head = visible_window(&lines, 2, ViewMode::Reading);
        assert_eq!(head[0].as_str(), "0");
        assert_eq!(visible_window(&lines, 10, ViewMode::Reading).len(), 5);
    }
}
