use std::path::PathBuf;

use wordpack_config::ConfigError;

/// Result type for composition and manifest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while composing build graphs or assembling the manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be found, loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The derived manifest file could not be written.
    #[error("cannot write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine-written manifest could not be read or parsed.
    #[error("cannot read manifest {}: {message}", .path.display())]
    ManifestRead { path: PathBuf, message: String },

    /// Two manifest entries with different emitted paths share a key.
    #[error("manifest key '{key}' maps to both {first} and {second}")]
    ManifestConflict {
        key: String,
        first: String,
        second: String,
    },

    /// The output root exists but is a file.
    #[error("output path exists but is not a directory: {}", .0.display())]
    OutputNotDirectory(PathBuf),

    /// A color string is not `#rgb` / `#rrggbb` hex.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Config(ConfigError::NotFound { .. }) => "CONFIG_NOT_FOUND",
            Error::Config(ConfigError::Invalid { .. }) => "CONFIG_INVALID",
            Error::Config(ConfigError::Load { .. }) => "CONFIG_LOAD_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            Error::ManifestWrite { .. } => "MANIFEST_WRITE_ERROR",
            Error::ManifestRead { .. } => "MANIFEST_READ_ERROR",
            Error::ManifestConflict { .. } => "MANIFEST_CONFLICT",
            Error::OutputNotDirectory(_) => "OUTPUT_NOT_DIRECTORY",
            Error::InvalidColor(_) => "INVALID_COLOR",
            Error::Io(_) => "IO_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Config(ConfigError::NotFound { file, .. }) => Some(Box::new(format!(
                "Create {file} in the project root or in assets/, or pass --config with its path."
            ))),
            Error::Config(ConfigError::Invalid { violations }) => Some(Box::new(format!(
                "Fix the {} listed field(s) and run again.",
                violations.len()
            ))),
            Error::Config(ConfigError::UnsupportedFormat(_)) => Some(Box::new(
                "Configuration files must be .toml or .json.",
            )),
            Error::ManifestWrite { path, .. } => Some(Box::new(format!(
                "Check that {} is writable and the disk is not full.",
                path.parent().unwrap_or(path).display()
            ))),
            Error::ManifestConflict { key, .. } => Some(Box::new(format!(
                "Rename one of the assets behind '{key}' so their manifest keys differ."
            ))),
            Error::OutputNotDirectory(path) => Some(Box::new(format!(
                "Remove the file at {} or point paths.root.dist elsewhere.",
                path.display()
            ))),
            Error::InvalidColor(_) => Some(Box::new("Use #rgb or #rrggbb hex notation.")),
            _ => None,
        }
    }
}
