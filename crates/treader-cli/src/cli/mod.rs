//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use treader_core::ReaderConfig;
use treader_core::config::{DEFAULT_DOCUMENT, DEFAULT_WRAP_WIDTH};

use crate::logging::{self, LogConfig, LogLevel};

mod version;

#[derive(Parser)]
#[command(name = "treader")]
#[command(version)]
#[command(about = "Read a text file disguised as a scrolling system log")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to read (UTF-8 or GBK)
    #[arg(value_name = "FILE", env = "TREADER_FILE", default_value = DEFAULT_DOCUMENT)]
    file: PathBuf,

    /// Wrap width in bytes
    #[arg(long, env = "TREADER_WIDTH", default_value_t = DEFAULT_WRAP_WIDTH)]
    width: usize,

    /// Starting brightness of the document text (0 = faintest, 9 = brightest)
    #[arg(
        long,
        env = "TREADER_OPACITY",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    opacity: u8,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH", env = "TREADER_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Diagnostics verbosity
    #[arg(long, value_enum, env = "TREADER_LOG_LEVEL", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print version and build information
    Version,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Version) = cli.command {
        println!("{}", version::render());
        return Ok(());
    }

    let config = reader_config(&cli);
    config.validate().context("invalid reader settings")?;

    logging::init(&LogConfig {
        level: cli.log_level,
        file: cli.log_file.clone(),
    })?;
    debug!(?config, "configuration resolved");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _guard = rt.enter();
    treader_tui::run_reader(config)
}

fn reader_config(cli: &Cli) -> ReaderConfig {
    ReaderConfig {
        document_path: cli.file.clone(),
        wrap_width: cli.width,
        initial_opacity: cli.opacity,
        ..ReaderConfig::default()
    }
}
