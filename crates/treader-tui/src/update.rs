//! Reader reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tracing::trace;

use crate::common::is_quit;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::navigation::handle_view_key;
use crate::search::handle_search_key;
use crate::state::AppState;

/// Applies one event to the state and returns the effects to run.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::FakeLine(line) => {
            app.fake_lines.push(line);
            vec![UiEffect::Render]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Resize(..) => vec![UiEffect::Render],
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if is_quit(&key) {
        return vec![UiEffect::Quit];
    }

    if app.reader.mode.is_search() {
        return handle_search_key(&mut app.reader, &app.document, key);
    }

    handle_view_key(&mut app.reader, key).unwrap_or_else(|| {
        trace!(code = ?key.code, "unbound key");
        vec![]
    })
}
