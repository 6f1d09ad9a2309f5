//! Application state.
//!
//! ```text
//! AppState
//! ├── reader: ReaderState        (mode, scroll offset, opacity, search input)
//! ├── document: Document         (immutable for the session)
//! ├── fake_lines: FakeLineBuffer (rolling camouflage log)
//! └── should_quit
//! ```
//!
//! The runtime owns the single `AppState`; only the reducer mutates it.

use treader_core::{Document, FakeLineBuffer, Opacity, Paging, ReaderConfig};

use crate::search::SearchInput;

/// The two layouts that can be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Fake log lines only.
    Camouflage,
    /// Fake log lines interleaved with the document.
    Reading,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Camouflage => ViewMode::Reading,
            ViewMode::Reading => ViewMode::Camouflage,
        }
    }
}

/// Reader mode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Camouflage,
    Reading,
    /// The search prompt has focus; `resume` is restored when it closes.
    SearchEntry { resume: ViewMode },
}

impl Mode {
    /// The layout drawn underneath, whichever mode has focus.
    pub fn view(self) -> ViewMode {
        match self {
            Mode::Camouflage => ViewMode::Camouflage,
            Mode::Reading => ViewMode::Reading,
            Mode::SearchEntry { resume } => resume,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, Mode::SearchEntry { .. })
    }
}

impl From<ViewMode> for Mode {
    fn from(view: ViewMode) -> Self {
        match view {
            ViewMode::Camouflage => Mode::Camouflage,
            ViewMode::Reading => Mode::Reading,
        }
    }
}

/// Mode, position and appearance of the reader.
///
/// The scroll offset is private so that every write goes through a
/// clamping method and stays within `0..=max_offset`.
#[derive(Debug, Clone)]
pub struct ReaderState {
    pub mode: Mode,
    pub opacity: Opacity,
    pub search: SearchInput,
    pub paging: Paging,
    scroll_offset: usize,
    max_offset: usize,
}

impl ReaderState {
    pub fn new(paging: Paging, opacity: Opacity, document_len: usize) -> Self {
        Self {
            mode: Mode::Camouflage,
            opacity,
            search: SearchInput::default(),
            paging,
            scroll_offset: 0,
            max_offset: document_len.saturating_sub(paging.size),
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Moves the offset to `offset`, clamped. Returns true if it changed.
    pub fn scroll_to(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.max_offset);
        let changed = clamped != self.scroll_offset;
        self.scroll_offset = clamped;
        changed
    }

    pub fn scroll_down(&mut self, lines: usize) -> bool {
        self.scroll_to(self.scroll_offset.saturating_add(lines))
    }

    pub fn scroll_up(&mut self, lines: usize) -> bool {
        self.scroll_to(self.scroll_offset.saturating_sub(lines))
    }

    /// Flips camouflage and reading. Ignored while the search prompt is open.
    pub fn toggle_view(&mut self) {
        if !self.mode.is_search() {
            self.mode = self.mode.view().toggled().into();
        }
    }

    /// Opens the search prompt over the current view.
    pub fn begin_search(&mut self) {
        let resume = self.mode.view();
        self.search.clear();
        self.mode = Mode::SearchEntry { resume };
    }

    /// Closes the search prompt and returns to the view it was opened from.
    pub fn end_search(&mut self) {
        self.search.clear();
        self.mode = self.mode.view().into();
    }

    pub fn raise_opacity(&mut self) -> bool {
        let next = self.opacity.raised();
        let changed = next != self.opacity;
        self.opacity = next;
        changed
    }

    pub fn lower_opacity(&mut self) -> bool {
        let next = self.opacity.lowered();
        let changed = next != self.opacity;
        self.opacity = next;
        changed
    }
}

/// Everything the reducer and renderer need.
#[derive(Debug)]
pub struct AppState {
    pub reader: ReaderState,
    pub document: Document,
    pub fake_lines: FakeLineBuffer,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &ReaderConfig, document: Document) -> Self {
        Self {
            reader: ReaderState::new(
                config.paging,
                Opacity::new(config.initial_opacity),
                document.len(),
            ),
            document,
            fake_lines: FakeLineBuffer::new(config.buffer_capacity),
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(document_len: usize) -> ReaderState {
        ReaderState::new(Paging::default(), Opacity::default(), document_len)
    }

    #[test]
    fn test_initial_state() {
        let state = reader(20);
        assert_eq!(state.mode, Mode::Camouflage);
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.opacity.level(), 3);
        assert_eq!(state.max_offset(), 5);
    }

    #[test]
    fn test_double_toggle_restores_mode_and_offset() {
        let mut state = reader(40);
        state.mode = Mode::Reading;
        state.scroll_to(12);
        state.toggle_view();
        assert_eq!(state.mode, Mode::Camouflage);
        state.toggle_view();
        assert_eq!(state.mode, Mode::Reading);
        assert_eq!(state.scroll_offset(), 12);
    }

    #[test]
    fn test_scroll_clamps_both_ends() {
        let mut state = reader(20);
        assert!(!state.scroll_up(1));
        assert!(state.scroll_down(100));
        assert_eq!(state.scroll_offset(), 5);
        assert!(!state.scroll_down(1));
        assert!(state.scroll_up(100));
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_short_document_cannot_scroll() {
        let mut state = reader(3);
        assert!(!state.scroll_down(1));
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_search_resumes_prior_view() {
        let mut state = reader(20);
        state.mode = Mode::Reading;
        state.begin_search();
        assert_eq!(
            state.mode,
            Mode::SearchEntry {
                resume: ViewMode::Reading
            }
        );
        state.toggle_view();
        assert!(state.mode.is_search());
        state.end_search();
        assert_eq!(state.mode, Mode::Reading);

        state.mode = Mode::Camouflage;
        state.begin_search();
        state.end_search();
        assert_eq!(state.mode, Mode::Camouflage);
    }

    #[test]
    fn test_opacity_reports_changes() {
        let mut state = reader(1);
        assert!(state.raise_opacity());
        assert_eq!(state.opacity.level(), 4);
        state.opacity = Opacity::new(0);
        assert!(!state.lower_opacity());
        assert_eq!(state.opacity.level(), 0);
    }
}
