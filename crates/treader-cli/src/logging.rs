//! Diagnostics logging.
//!
//! The reader owns the terminal, so log output only goes to a file. Without
//! `--log-file` no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Overrides the filter computed from `--log-level`.
pub const FILTER_ENV: &str = "TREADER_LOG_FILTER";

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the global subscriber when a log file is configured.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    if GUARD.get().is_some() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level.to_filter()))
        .with_level(true)
        .with_target(config.level >= LogLevel::Debug)
        .with_thread_ids(config.level >= LogLevel::Trace)
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| anyhow!("configure logger: {err}"))?;

    let _ = GUARD.set(guard);
    Ok(())
}

fn build_env_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var(FILTER_ENV) {
        Ok(filter) => EnvFilter::new(filter),
        Err(_) => EnvFilter::new(default_filter_for(level)),
    }
}

/// Our crates at `level`; dependencies capped at info above that.
fn default_filter_for(level: LevelFilter) -> String {
    match level {
        LevelFilter::TRACE | LevelFilter::DEBUG => {
            let level = level.to_string().to_lowercase();
            format!("info,treader={level},treader_core={level},treader_tui={level}")
        }
        other => other.to_string().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
        assert_eq!(default_filter_for(LogLevel::Warn.to_filter()), "warn");
    }

    #[test]
    fn test_debug_filter_scopes_our_crates() {
        let filter = default_filter_for(LogLevel::Debug.to_filter());
        assert_eq!(
            filter,
            "info,treader=debug,treader_core=debug,treader_tui=debug"
        );
    }

    #[test]
    fn test_no_file_installs_nothing() {
        assert!(init(&LogConfig::default()).is_ok());
        assert!(GUARD.get().is_none());
    }
}
