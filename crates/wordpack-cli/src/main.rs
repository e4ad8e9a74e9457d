//! WordPack CLI entry point: parse arguments, set up logging, dispatch.

use clap::Parser;
use miette::Result;
use wordpack_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(manifest_args).await,
        cli::Command::Color(color_args) => commands::color_execute(color_args).await,
    };

    // Convert CLI errors to miette diagnostics for reporting
    result.map_err(error::cli_error_to_miette)
}
