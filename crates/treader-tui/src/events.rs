//! UI event types.
//!
//! Every input to the reducer is a `UiEvent`: terminal events read by the
//! runtime, and fake log lines sent by the background ticker through the
//! inbox channel.

use crossterm::event::Event as CrosstermEvent;
use treader_core::StyledLine;

#[derive(Debug)]
pub enum UiEvent {
    /// A raw terminal event (key, resize, ...).
    Terminal(CrosstermEvent),
    /// A freshly generated fake log line.
    FakeLine(StyledLine),
}
