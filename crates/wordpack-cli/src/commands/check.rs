//! Check command implementation.
//!
//! Loads and validates the configuration without composing anything, then
//! lists the bundles that would be built.

use wordpack_compose::BuildRun;
use wordpack_config::{Bundle, SplitChunks, UserConfig};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns the configuration error listing every violation.
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::load_project(&args.project).await?;
    ui::success("Configuration is valid!");

    for line in summary(&config) {
        eprintln!("{line}");
    }

    if !config.multimode {
        ui::warning(&format!(
            "multimode is off: {} bundle(s) are combined into one graph",
            config.bundles.len()
        ));
    }

    Ok(())
}

fn summary(config: &UserConfig) -> Vec<String> {
    let run = BuildRun::new(config);
    let mut lines = vec![format!(
        "  mode {} -> {}",
        config.mode(),
        config.dist_root().display()
    )];
    lines.extend(run.bundles().iter().map(describe));
    lines
}

fn describe(bundle: &Bundle) -> String {
    let chunks = match &bundle.split_chunks {
        SplitChunks::Enabled { name, min_size, .. } => {
            format!("vendor chunk {name} (min {min_size} bytes)")
        }
        SplitChunks::Disabled => "no chunk splitting".to_string(),
    };
    format!("  {} ({} files, {})", bundle.name, bundle.files.len(), chunks)
}
