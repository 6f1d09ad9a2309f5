//! Core engine for the camouflaged reader.
//!
//! Everything here is terminal-agnostic: document ingestion, the fake log
//! generator and its rolling buffer, the opacity palette, search, and the
//! markup convention used to carry colors inside plain strings.

pub mod config;
pub mod fakelog;
pub mod ingest;
pub mod markup;
pub mod palette;
pub mod search;

pub use config::{Paging, ReaderConfig};
pub use fakelog::{FakeLineBuffer, FakeLogGenerator};
pub use ingest::Document;
pub use markup::{StyledLine, Tint};
pub use palette::Opacity;
