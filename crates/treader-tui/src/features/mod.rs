//! Feature slices.
//!
//! - `navigation`: key map for the camouflage and reading views
//! - `search`: the search prompt (input buffer, key handling, rendering)

pub mod navigation;
pub mod search;
