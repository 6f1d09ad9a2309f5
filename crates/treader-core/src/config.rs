//! Reader configuration.
//!
//! There is no config file: the CLI fills a `ReaderConfig` from flags and
//! environment variables, and everything it leaves alone keeps these defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};

use crate::palette::MAX_LEVEL;

/// Document loaded when no path is given.
pub const DEFAULT_DOCUMENT: &str = "novel.txt";

/// Default wrap width, in bytes.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Default capacity of the rolling fake-line buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 25;

/// Narrowest wrap width accepted; one UTF-8 scalar value always fits.
pub const MIN_WRAP_WIDTH: usize = 4;

/// Row and scroll geometry of the reading view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Display rows composed per reading frame (excluding the status line).
    pub rows: usize,
    /// Document lines treated as one visible page when clamping the scroll offset.
    pub size: usize,
    /// Lines moved by PageUp/PageDown.
    pub step: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            rows: 22,
            size: 15,
            step: 5,
        }
    }
}

/// Runtime configuration for a reader session.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub document_path: PathBuf,
    pub wrap_width: usize,
    pub buffer_capacity: usize,
    pub paging: Paging,
    pub initial_opacity: u8,
    /// Shortest pause between two fake log lines.
    pub min_interval: Duration,
    /// Longest pause between two fake log lines.
    pub max_interval: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT),
            wrap_width: DEFAULT_WRAP_WIDTH,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            paging: Paging::default(),
            initial_opacity: 3,
            min_interval: Duration::from_millis(1000),
            max_interval: Duration::from_millis(3000),
        }
    }
}

impl ReaderConfig {
    /// Rejects settings the reader cannot run with.
    ///
    /// # Errors
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.wrap_width < MIN_WRAP_WIDTH {
            bail!(
                "wrap width must be at least {MIN_WRAP_WIDTH} bytes (got {})",
                self.wrap_width
            );
        }
        if self.buffer_capacity == 0 {
            bail!("fake line buffer capacity must be positive");
        }
        if self.paging.rows == 0 || self.paging.size == 0 || self.paging.step == 0 {
            bail!("page rows, page size and page step must all be positive");
        }
        if self.initial_opacity > MAX_LEVEL {
            bail!(
                "opacity must be between 0 and {MAX_LEVEL} (got {})",
                self.initial_opacity
            );
        }
        if self.min_interval > self.max_interval {
            bail!(
                "minimum fake line interval ({:?}) exceeds the maximum ({:?})",
                self.min_interval,
                self.max_interval
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReaderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.document_path, PathBuf::from("novel.txt"));
        assert_eq!(config.paging.rows, 22);
        assert_eq!(config.paging.size, 15);
        assert_eq!(config.initial_opacity, 3);
    }

    #[test]
    fn test_rejects_narrow_width() {
        let config = ReaderConfig {
            wrap_width: 3,
            ..ReaderConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("wrap width"));
    }

    #[test]
    fn test_rejects_out_of_range_opacity() {
        let config = ReaderConfig {
            initial_opacity: 10,
            ..ReaderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_interval() {
        let config = ReaderConfig {
            min_interval: Duration::from_secs(5),
            max_interval: Duration::from_secs(1),
            ..ReaderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = ReaderConfig {
            buffer_capacity: 0,
            ..ReaderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
