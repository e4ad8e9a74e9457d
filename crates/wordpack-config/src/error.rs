//! Error types for configuration discovery, loading and validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the candidate locations holds the requested file.
    #[error("cannot find configuration file {file} (searched: {})", display_paths(.searched))]
    NotFound { file: String, searched: Vec<PathBuf> },

    /// The merged configuration failed validation. Every violation is listed.
    #[error("invalid configuration:\n{}", display_violations(.violations))]
    Invalid { violations: Vec<Violation> },

    /// The file exists but could not be read or parsed.
    #[error("error parsing configuration file {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Build an [`ConfigError::Invalid`] from a single violation.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            violations: vec![Violation::new(field, message)],
        }
    }

    /// Violations carried by this error, empty for every other variant.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ConfigError::Invalid { violations } => violations,
            _ => &[],
        }
    }
}

/// One failed constraint, addressed by a dotted field path (`bundles[0].name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn display_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
