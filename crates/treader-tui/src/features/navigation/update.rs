//! View key map.
//!
//! | key | effect |
//! |---|---|
//! | `h` | toggle camouflage / reading |
//! | `[` / `]` | dim / brighten document text |
//! | `j` `k` ↓ ↑ | scroll one line (reading only) |
//! | PgDn / PgUp | scroll one page step (reading only) |
//! | `/` | open the search prompt |

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::common::Modifiers;
use crate::effects::UiEffect;
use crate::state::{ReaderState, ViewMode};

/// Handles a key in camouflage or reading mode.
///
/// Returns `None` when no binding matches, leaving the key unconsumed.
pub fn handle_view_key(reader: &mut ReaderState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    if reader.mode.is_search() {
        return None;
    }
    let mods = Modifiers::from(&key);
    let reading = reader.mode.view() == ViewMode::Reading;
    let step = reader.paging.step;

    let changed = match key.code {
        KeyCode::Char('h') if mods.plain() => {
            reader.toggle_view();
            debug!(mode = ?reader.mode, "view toggled");
            true
        }
        KeyCode::Char('/') if mods.plain() => {
            reader.begin_search();
            true
        }
        KeyCode::Char('[') if mods.plain() => reader.lower_opacity(),
        KeyCode::Char(']') if mods.plain() => reader.raise_opacity(),
        KeyCode::Char('j') if reading && mods.plain() => reader.scroll_down(1),
        KeyCode::Down if reading => reader.scroll_down(1),
        KeyCode::Char('k') if reading && mods.plain() => reader.scroll_up(1),
        KeyCode::Up if reading => reader.scroll_up(1),
        KeyCode::PageDown if reading => reader.scroll_down(step),
        KeyCode::PageUp if reading => reader.scroll_up(step),
        _ => return None,
    };

    Some(if changed {
        vec![UiEffect::Render]
    } else {
        vec![]
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use treader_core::{Opacity, Paging};

    use super::*;
    use crate::state::Mode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn reading(document_len: usize) -> ReaderState {
        let mut reader = ReaderState::new(Paging::default(), Opacity::default(), document_len);
        reader.mode = Mode::Reading;
        reader
    }

    #[test]
    fn test_toggle_twice_keeps_offset() {
        let mut reader = reading(30);
        handle_view_key(&mut reader, key(KeyCode::Char('j')));
        handle_view_key(&mut reader, key(KeyCode::Char('h')));
        assert_eq!(reader.mode, Mode::Camouflage);
        handle_view_key(&mut reader, key(KeyCode::Char('h')));
        assert_eq!(reader.mode, Mode::Reading);
        assert_eq!(reader.scroll_offset(), 1);
    }

    #[test]
    fn test_page_down_clamps_at_max_offset() {
        let mut reader = reading(20);
        handle_view_key(&mut reader, key(KeyCode::PageDown));
        assert_eq!(reader.scroll_offset(), 5);
        let effects = handle_view_key(&mut reader, key(KeyCode::PageDown));
        assert_eq!(reader.scroll_offset(), 5);
        assert_eq!(effects, Some(vec![]));
    }

    #[test]
    fn test_page_up_clamps_at_zero() {
        let mut reader = reading(40);
        handle_view_key(&mut reader, key(KeyCode::Down));
        handle_view_key(&mut reader, key(KeyCode::Down));
        handle_view_key(&mut reader, key(KeyCode::PageUp));
        assert_eq!(reader.scroll_offset(), 0);
    }

    #[test]
    fn test_line_scroll_keys() {
        let mut reader = reading(40);
        for _ in 0..3 {
            handle_view_key(&mut reader, key(KeyCode::Char('j')));
        }
        handle_view_key(&mut reader, key(KeyCode::Up));
        assert_eq!(reader.scroll_offset(), 2);
        handle_view_key(&mut reader, key(KeyCode::Char('k')));
        assert_eq!(reader.scroll_offset(), 1);
    }

    #[test]
    fn test_scroll_keys_unbound_in_camouflage() {
        let mut reader = reading(40);
        reader.mode = Mode::Camouflage;
        assert_eq!(handle_view_key(&mut reader, key(KeyCode::Char('j'))), None);
        assert_eq!(handle_view_key(&mut reader, key(KeyCode::PageDown)), None);
        assert_eq!(reader.scroll_offset(), 0);
    }

    #[test]
    fn test_opacity_clamps() {
        let mut reader = reading(5);
        for _ in 0..20 {
            handle_view_key(&mut reader, key(KeyCode::Char(']')));
        }
        assert_eq!(reader.opacity.level(), 9);
        for _ in 0..20 {
            handle_view_key(&mut reader, key(KeyCode::Char('[')));
        }
        assert_eq!(reader.opacity.level(), 0);
        assert_eq!(reader.mode, Mode::Reading);
    }

    #[test]
    fn test_opacity_works_in_camouflage() {
        let mut reader = reading(5);
        reader.mode = Mode::Camouflage;
        let effects = handle_view_key(&mut reader, key(KeyCode::Char(']')));
        assert_eq!(effects, Some(vec![UiEffect::Render]));
        assert_eq!(reader.opacity.level(), 4);
    }

    #[test]
    fn test_slash_opens_search_from_camouflage() {
        let mut reader = reading(5);
        reader.mode = Mode::Camouflage;
        handle_view_key(&mut reader, key(KeyCode::Char('/')));
        assert_eq!(
            reader.mode,
            Mode::SearchEntry {
                resume: ViewMode::Camouflage
            }
        );
    }

    #[test]
    fn test_unbound_key_passes_through() {
        let mut reader = reading(5);
        assert_eq!(handle_view_key(&mut reader, key(KeyCode::Char('x'))), None);
        assert_eq!(handle_view_key(&mut reader, key(KeyCode::Tab)), None);
    }
}
