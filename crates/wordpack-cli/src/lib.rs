//! WordPack CLI.
//!
//! Command-line front end for the composer: it resolves invocation parameters,
//! loads the project's `wordpack.config.*`, and prints the composed build
//! graphs as JSON for the bundling engine. It also exposes the manifest
//! assembler and the bundle color assigner as standalone commands.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - one module per subcommand
//! - [`error`] - `CliError` and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr
//!
//! # Example
//!
//! ```rust
//! use wordpack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
