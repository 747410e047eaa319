//! Error types for report loading and configuration
//!
//! Grammar problems in a report are never errors: the parser truncates
//! malformed blocks instead. Only reading the report or a config file, or
//! parsing an option value, can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur around a report run
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report stream or a file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown severity threshold
    #[error("Invalid report level '{0}' (expected 'error' or 'warning')")]
    InvalidLevel(String),

    /// Unknown measurement unit
    #[error("Invalid units '{0}' (expected 'mm' or 'in')")]
    InvalidUnits(String),

    /// Config file exists but is not valid
    #[error("Invalid config at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ReportError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = ReportError::io(
            "/tmp/board.rpt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/board.rpt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_invalid_level_display() {
        let err = ReportError::InvalidLevel("fatal".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid report level 'fatal' (expected 'error' or 'warning')"
        );
    }
}
