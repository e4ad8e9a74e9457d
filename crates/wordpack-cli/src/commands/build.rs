//! Build command implementation.
//!
//! Composes the build graphs and prints them as a JSON array, one graph per
//! bundle followed by the asset copy graph.

use std::path::Path;
use std::time::Instant;

use wordpack_compose::Fragment;

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Resolve invocation parameters from the flags
/// 2. Load and validate the configuration
/// 3. Empty the output directory
/// 4. Compose the graphs
/// 5. Print them, or write them to `--output`
///
/// Nothing is written when loading fails.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();
    let cwd = utils::get_cwd()?;
    let params = utils::env_params(&args.project, ui::is_ci());

    ui::info("Composing build graphs...");
    let graphs =
        wordpack_compose::build_config(&params, &cwd, args.project.config.as_deref()).await?;

    let json = render(&graphs, args.compact)?;
    match &args.output {
        Some(output) => {
            let output = utils::resolve_path(output, &cwd);
            write_output(&output, &json).await?;
            ui::info(&format!("Wrote {}", output.display()));
        }
        None => println!("{json}"),
    }

    ui::success(&format!(
        "Composed {} build graphs in {}",
        graphs.len(),
        ui::format_duration(start_time.elapsed())
    ));
    Ok(())
}

fn render(graphs: &[Fragment], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(graphs)?
    } else {
        serde_json::to_string_pretty(graphs)?
    };
    Ok(json)
}

async fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.with_path(parent)?;
    }
    tokio::fs::write(path, format!("{json}\n")).await.with_path(path)
}
