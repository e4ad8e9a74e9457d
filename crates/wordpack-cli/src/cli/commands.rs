use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_color, parse_env_pair};

/// Available WordPack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the build graphs
    ///
    /// Loads the configuration, empties the output directory and prints one
    /// build graph per bundle plus the asset copy graph as a JSON array.
    Build(BuildArgs),

    /// Validate the configuration without composing
    ///
    /// Reports every violation at once. The output directory is not touched.
    Check(CheckArgs),

    /// Write the PHP manifest next to the engine's JSON manifest
    ///
    /// Normally run by the engine after emission; use it to regenerate
    /// assets.php by hand.
    Manifest(ManifestArgs),

    /// Show the progress color assigned to each bundle name
    Color(ColorArgs),
}

/// Options locating and parameterizing the project configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Configuration file name or path
    ///
    /// A bare file name is searched for in the project root and the usual
    /// assets directories.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Project root, relative to the working directory
    #[arg(short = 'b', long, value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Compose production graphs (minimizers on, source maps off)
    #[arg(short, long)]
    pub production: bool,

    /// Compose watch graphs (no chunk splitting)
    #[arg(short, long)]
    pub watch: bool,

    /// Extra invocation parameters, as the engine passes them
    ///
    /// Examples:
    ///   --env production
    ///   --env WEBPACK_WATCH=true
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the graphs to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the manifest command
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Engine manifest to read
    ///
    /// Defaults to the manifest named in the configuration, under the
    /// output root.
    #[arg(value_name = "MANIFEST")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the color command
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Names to color; the configured bundles when omitted
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Background the colors must stay legible on
    #[arg(long, value_name = "HEX", default_value = wordpack_compose::DEFAULT_BACKGROUND, value_parser = parse_color)]
    pub background: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}
