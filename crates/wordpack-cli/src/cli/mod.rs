//! Command-line interface definition for WordPack.
//!
//! # Command Structure
//!
//! - `wordpack build` - compose build graphs and print them as JSON
//! - `wordpack check` - load and validate the configuration only
//! - `wordpack manifest` - write `assets.php` from the engine's `assets.json`
//! - `wordpack color` - show the progress colors assigned to bundle names

mod commands;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, ColorArgs, Command, ManifestArgs, ProjectArgs};
pub use validation::{parse_color, parse_env_pair};

/// WordPack - webpack build graphs for WordPress themes and plugins
#[derive(Parser, Debug)]
#[command(
    name = "wordpack",
    version,
    about = "Compose webpack build graphs for WordPress themes and plugins",
    long_about = "WordPack reads a declarative wordpack.config.toml and composes one build graph\n\
                  per bundle plus a static asset copy graph. The graphs are printed as JSON\n\
                  for the bundling engine; the engine's asset manifest is turned into a PHP\n\
                  lookup table once it has been written."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Useful for CI or when piping the composed JSON to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
