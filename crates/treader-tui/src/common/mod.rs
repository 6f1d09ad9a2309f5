//! Helpers shared across feature slices.

pub mod keys;

pub use keys::{Modifiers, is_quit};
