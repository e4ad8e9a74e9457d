//! Manifest command implementation.
//!
//! Runs the manifest assembler over the engine's JSON manifest and writes the
//! PHP lookup table next to it.

use std::path::PathBuf;

use wordpack_compose::ManifestAssembler;

use crate::cli::ManifestArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the manifest command.
///
/// Without an explicit path the configuration is loaded to locate the
/// manifest under the output root.
pub async fn execute(args: ManifestArgs) -> Result<()> {
    let manifest = match &args.path {
        Some(path) => utils::resolve_path(path, &utils::get_cwd()?),
        None => configured_manifest(&args).await?,
    };

    tracing::debug!(path = %manifest.display(), "assembling manifest");
    let php = ManifestAssembler::new(manifest).assemble()?;

    ui::success(&format!("Wrote {}", php.display()));
    Ok(())
}

async fn configured_manifest(args: &ManifestArgs) -> Result<PathBuf> {
    let config = utils::load_project(&args.project).await?;
    let name = config.manifest_file().ok_or_else(|| {
        CliError::InvalidArgument(
            "manifest emission is disabled in the configuration; pass the manifest path".to_string(),
        )
    })?;
    Ok(config.dist_root().join(name))
}
