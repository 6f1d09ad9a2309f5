//! Search prompt reducer.
//!
//! Enter confirms and Esc cancels; both close the prompt, clear the buffer
//! and return to the view the prompt was opened from. Every other key edits
//! the buffer.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;
use treader_core::{Document, search};

use crate::common::Modifiers;
use crate::effects::UiEffect;
use crate::state::ReaderState;

/// Handles a key while the search prompt has focus.
pub fn handle_search_key(
    reader: &mut ReaderState,
    document: &Document,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => {
            let query = reader.search.take();
            if !query.is_empty() {
                apply_search(reader, document, &query);
            }
            reader.end_search();
            vec![UiEffect::Render]
        }
        KeyCode::Esc => {
            reader.end_search();
            vec![UiEffect::Render]
        }
        _ => {
            if edit_input(reader, key) {
                vec![UiEffect::Render]
            } else {
                vec![]
            }
        }
    }
}

fn apply_search(reader: &mut ReaderState, document: &Document, query: &str) {
    match search::find(document, query) {
        Some(hit) => {
            let target = search::scroll_target(hit, document.len(), reader.paging.size);
            reader.scroll_to(target);
            debug!(hit, offset = reader.scroll_offset(), "search matched");
        }
        None => debug!("search found no match"),
    }
}

/// Applies an editing key to the buffer. Returns true if anything changed.
fn edit_input(reader: &mut ReaderState, key: KeyEvent) -> bool {
    let mods = Modifiers::from(&key);
    let input = &mut reader.search;
    match key.code {
        KeyCode::Char('a') if mods.only_ctrl() => input.move_head(),
        KeyCode::Char('e') if mods.only_ctrl() => input.move_end(),
        KeyCode::Char('u') if mods.only_ctrl() => input.delete_to_head(),
        KeyCode::Char(ch) if mods.plain() => {
            input.insert_char(ch);
            true
        }
        KeyCode::Backspace => input.delete_prev_char(),
        KeyCode::Delete => input.delete_next_char(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_head(),
        KeyCode::End => input.move_end(),
        _ => false,
    }
}
