//! Key event helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Parsed key modifiers for cleaner pattern matching.
#[derive(Debug, Clone, Copy)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
            alt: key.modifiers.contains(KeyModifiers::ALT),
            super_key: key.modifiers.contains(KeyModifiers::SUPER),
        }
    }

    /// No chord modifiers. Shift is allowed since it only picks the character.
    pub fn plain(self) -> bool {
        !self.ctrl && !self.alt && !self.super_key
    }

    pub fn only_ctrl(self) -> bool {
        self.ctrl && !self.shift && !self.alt && !self.super_key
    }
}

/// Ctrl+C quits from every mode.
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c' | 'C')) && Modifiers::from(key).ctrl
}
