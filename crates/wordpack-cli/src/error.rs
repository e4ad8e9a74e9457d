//! Error handling for the WordPack CLI.
//!
//! `CliError` wraps the composer and configuration errors and adds the
//! failures that only exist at the command line (bad arguments, output
//! files). `main` turns it into a miette report with [`cli_error_to_miette`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wordpack_cli::error::{Result, ResultExt};
//!
//! fn write_graphs(path: &Path, json: &str) -> Result<()> {
//!     std::fs::write(path, json).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;

use thiserror::Error;
use wordpack_config::ConfigError;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Composition or manifest failures, including configuration errors
    #[error(transparent)]
    Compose(#[from] wordpack_compose::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Compose(err.into())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpack_config::Violation;

    #[test]
    fn test_config_error_converts_through_compose() {
        let err: CliError = ConfigError::invalid("bundles", "is required").into();
        assert!(matches!(
            err,
            CliError::Compose(wordpack_compose::Error::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_lists_every_violation() {
        let err: CliError = ConfigError::Invalid {
            violations: vec![
                Violation::new("bundles[0].name", "must not be empty"),
                Violation::new("chunkMinSize", "must be a non-negative integer"),
            ],
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("bundles[0].name: must not be empty"));
        assert!(msg.contains("chunkMinSize: must be a non-negative integer"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/assets.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), CliError> =
            Err(CliError::InvalidArgument("--env".to_string()));

        let msg = result.with_hint("Use KEY=VALUE").unwrap_err().to_string();
        assert!(msg.contains("Hint: Use KEY=VALUE"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let msg = result.context("Failed to write graphs").unwrap_err().to_string();
        assert!(msg.starts_with("Failed to write graphs: "));
    }
}
