//! Search prompt slice.
//!
//! - `state.rs`: single-line `SearchInput` buffer
//! - `update.rs`: key handling while the prompt has focus
//! - `render.rs`: prompt row drawn under the main view

mod render;
mod state;
mod update;

pub use render::render_search_input;
pub use state::SearchInput;
pub use update::handle_search_key;
