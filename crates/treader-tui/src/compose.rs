//! Frame composition.
//!
//! Turns the reader state into the styled lines of one frame. Pure: the only
//! outside input is the clock reading passed in for filler timestamps.
//!
//! Reading layout, walking a fake-line cursor and a document cursor that
//! starts at the scroll offset:
//! - on an even row count with document left, a fake line is followed by a
//!   document row (2 rows)
//! - otherwise a lone fake line (1 row)
//! - once the buffer runs dry, canned filler lines take its place until the
//!   row budget or the document runs out
//! - a status line with reading progress closes the frame

use chrono::NaiveTime;
use treader_core::markup::escape;
use treader_core::{Document, FakeLineBuffer, StyledLine, Tint};

use crate::state::{ReaderState, ViewMode};

const KEY_LEGEND: &str = "j/k ↑↓ scroll | PgUp/PgDn page | h toggle | [/] opacity | / search";

/// Composes the lines for the view under the current mode.
///
/// While the search prompt is open this is the view it was opened from, so
/// the prompt sits over unchanged content.
pub fn compose(
    reader: &ReaderState,
    document: &Document,
    fake_lines: &FakeLineBuffer,
    now: NaiveTime,
) -> Vec<StyledLine> {
    match reader.mode.view() {
        ViewMode::Camouflage => fake_lines.iter().cloned().collect(),
        ViewMode::Reading => compose_reading(reader, document, fake_lines, now),
    }
}

fn compose_reading(
    reader: &ReaderState,
    document: &Document,
    fake_lines: &FakeLineBuffer,
    now: NaiveTime,
) -> Vec<StyledLine> {
    let budget = reader.paging.rows;
    let tint = reader.opacity.tint();
    let mut lines = Vec::with_capacity(budget + 1);
    let mut doc = document.lines().iter().skip(reader.scroll_offset()).peekable();
    let mut rows = 0;

    for fake in fake_lines.iter() {
        if rows >= budget {
            break;
        }
        lines.push(fake.clone());
        if rows % 2 == 0
            && let Some(text) = doc.next()
        {
            lines.push(document_row(text, tint));
            rows += 2;
        } else {
            rows += 1;
        }
    }

    while rows < budget && doc.peek().is_some() {
        if rows % 2 == 0
            && let Some(text) = doc.next()
        {
            lines.push(filler_line(now, "[INFO] Processing background tasks..."));
            lines.push(document_row(text, tint));
            rows += 2;
        } else {
            lines.push(filler_line(now, "[DEBUG] System status: OK"));
            rows += 1;
        }
    }

    lines.push(status_line(reader.scroll_offset(), document.len(), tint));
    lines
}

/// Document text indented under the fake line above it.
fn document_row(text: &str, tint: Tint) -> StyledLine {
    StyledLine::new(format!("{tint}│  {}{}", escape(text), Tint::White))
}

fn filler_line(now: NaiveTime, message: &str) -> StyledLine {
    StyledLine::new(format!(
        "{}{} ├─ {message}{}",
        Tint::Gray,
        now.format("%H:%M:%S"),
        Tint::White
    ))
}

fn status_line(offset: usize, document_len: usize, tint: Tint) -> StyledLine {
    StyledLine::new(format!(
        "{tint}━━ Reading ({:.1}%) | {KEY_LEGEND} ━━{}",
        progress_percent(offset, document_len),
        Tint::White
    ))
}

/// Reading progress as `offset / len * 100`, 0 for an empty document.
pub fn progress_percent(offset: usize, document_len: usize) -> f64 {
    if document_len == 0 {
        return 0.0;
    }
    offset as f64 / document_len as f64 * 100.0
}
