//! Key map for the camouflage and reading views.

mod update;

pub use update::handle_view_key;
