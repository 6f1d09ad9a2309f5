//! UI effect types.
//!
//! Effects are what the reducer asks the runtime to do after a state change.
//! The reducer never draws or exits on its own.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Redraw the frame.
    Render,
    /// Stop the ticker and leave the event loop.
    Quit,
}
