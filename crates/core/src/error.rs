use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for valueview-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the dataset viewer
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset loading errors
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Entry browser errors
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading recorded datasets from disk
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Source path does not exist
    #[error("dataset source not found: {0}")]
    NotFound(PathBuf),

    /// A JSONL line could not be decoded into an entry
    #[error("invalid entry in {path} at line {line}: {reason}")]
    InvalidEntry { path: PathBuf, line: usize, reason: String },

    /// The data file does not hold a dataset mapping
    #[error("invalid data file: {0}")]
    InvalidDataFile(String),

    /// A runs directory without any recorded datasets
    #[error("no prompts-response.jsonl files found under {0}")]
    Empty(PathBuf),
}

/// Errors raised by the entry browser's fallible entry points
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// The requested key is not in the dataset source
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    /// The requested section id does not name a display section
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err: Error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert_eq!(io_err.to_string(), "I/O error: file not found");

        let config_err: Error = Error::Config("bad theme".to_string());
        assert_eq!(config_err.to_string(), "configuration error: bad theme");
    }

    #[test]
    fn test_dataset_error_display() {
        let not_found = DatasetError::NotFound(PathBuf::from("/runs"));
        assert_eq!(not_found.to_string(), "dataset source not found: /runs");

        let invalid = DatasetError::InvalidEntry {
            path: PathBuf::from("runs/a/prompts-response.jsonl"),
            line: 3,
            reason: "expected value".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "invalid entry in runs/a/prompts-response.jsonl at line 3: expected value"
        );

        let empty = DatasetError::Empty(PathBuf::from("/runs"));
        assert_eq!(empty.to_string(), "no prompts-response.jsonl files found under /runs");
    }

    #[test]
    fn test_browser_error_display() {
        assert_eq!(
            BrowserError::UnknownDataset("run_x".to_string()).to_string(),
            "unknown dataset: run_x"
        );
        assert_eq!(
            BrowserError::UnknownSection("sidebar".to_string()).to_string(),
            "unknown section: sidebar"
        );
    }

    #[test]
    fn test_error_from_dataset_error() {
        let error: Error = DatasetError::NotFound(PathBuf::from("/data.js")).into();
        assert_eq!(error.to_string(), "dataset error: dataset source not found: /data.js");
    }

    #[test]
    fn test_error_from_browser_error() {
        let error: Error = BrowserError::UnknownDataset("missing".to_string()).into();
        assert_eq!(error.to_string(), "browser error: unknown dataset: missing");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_err.into();
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
