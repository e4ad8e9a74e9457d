//! Configuration layer for WordPack.
//!
//! Turns invocation parameters into an [`Environment`], finds and loads the
//! user's `wordpack.config.*` file, merges the environment over it and
//! validates the result into a typed [`UserConfig`].

pub mod bundle;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod paths;
pub mod source;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use env::{EnvParams, Environment};
pub use error::*;
pub use paths::{AssetKind, PathConfig, PathEntry, Side};

// Re-export discovery and validation
pub use discovery::{CANDIDATE_DIRS, ConfigDiscovery, DEFAULT_CONFIG_FILE};
pub use source::{ConfigSource, FileConfigSource};
pub use validation::{ConfigValidator, SchemaValidator, validate_value};
