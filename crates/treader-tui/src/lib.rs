//! Full-screen TUI for the camouflaged reader.

pub mod common;
pub mod compose;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{navigation, search};
pub use runtime::TuiRuntime;
use tracing::info;
use treader_core::{ReaderConfig, ingest};

/// Loads the document and runs the reader until the quit key.
///
/// Must be called with a multi-thread tokio runtime entered; the fake log
/// ticker runs on its workers while this thread drives the terminal.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_reader(config: ReaderConfig) -> Result<()> {
    // The reader paints to stdout and needs a real terminal to do so
    if !stdout().is_terminal() {
        anyhow::bail!("treader needs an interactive terminal on stdout.");
    }

    let document = ingest::load(&config.document_path, config.wrap_width);
    info!(
        path = %config.document_path.display(),
        lines = document.len(),
        "starting reader"
    );

    let mut runtime = TuiRuntime::new(config, document)?;
    runtime.run()
}
