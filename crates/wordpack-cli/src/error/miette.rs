//! Miette conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert a `CliError` into a miette report.
///
/// Composer errors carry their own diagnostic code and help text; everything
/// else is reported by message.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Compose(e) => Report::new(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path and run again.",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
