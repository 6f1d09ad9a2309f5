//! Opacity palette for the hidden document text.

use crate::markup::Tint;

/// Highest opacity level.
pub const MAX_LEVEL: u8 = 9;

/// Gray ramp from barely visible to readable, indexed by level.
const SHADES: [Tint; MAX_LEVEL as usize + 1] = [
    Tint::Rgb(0x10, 0x10, 0x10),
    Tint::Rgb(0x20, 0x20, 0x20),
    Tint::Rgb(0x30, 0x30, 0x30),
    Tint::Rgb(0x40, 0x40, 0x40),
    Tint::Rgb(0x50, 0x50, 0x50),
    Tint::Rgb(0x60, 0x60, 0x60),
    Tint::Rgb(0x70, 0x70, 0x70),
    Tint::Rgb(0x80, 0x80, 0x80),
    Tint::Rgb(0x90, 0x90, 0x90),
    Tint::Rgb(0xa0, 0xa0, 0xa0),
];

/// A discrete opacity level in `0..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Default for Opacity {
    fn default() -> Self {
        Self(3)
    }
}

impl Opacity {
    /// Creates a level, clamping anything above `MAX_LEVEL`.
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_LEVEL))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// One step brighter, saturating at `MAX_LEVEL`.
    #[must_use]
    pub fn raised(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One step dimmer, saturating at 0.
    #[must_use]
    pub fn lowered(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Display color for document text at this level.
    pub fn tint(self) -> Tint {
        SHADES[usize::from(self.0)]
    }
}
