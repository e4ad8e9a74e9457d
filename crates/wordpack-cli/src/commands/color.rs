//! Color command implementation.
//!
//! Prints the progress color each name gets, one `name  #rrggbb` line per
//! name on stdout.

use wordpack_compose::{BuildRun, Colorizer};

use crate::cli::ColorArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the color command.
///
/// With no names, the bundles of the loaded configuration are listed and an
/// explicit bundle color wins over the assigned one.
pub async fn execute(args: ColorArgs) -> Result<()> {
    let colorizer = Colorizer::new(&args.background)?;

    let rows = if args.names.is_empty() {
        let config = utils::load_project(&args.project).await?;
        let run = BuildRun::with_colorizer(&config, colorizer);
        run.bundles()
            .iter()
            .map(|bundle| {
                let color = bundle
                    .color
                    .clone()
                    .unwrap_or_else(|| run.colorizer().assign(&bundle.name));
                (bundle.name.clone(), color)
            })
            .collect()
    } else {
        assign_all(&colorizer, &args.names)
    };

    let width = rows.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    for (name, color) in &rows {
        println!("{name:<width$}  {}", ui::swatch(color));
    }

    Ok(())
}

fn assign_all(colorizer: &Colorizer, names: &[String]) -> Vec<(String, String)> {
    names
        .iter()
        .map(|name| (name.clone(), colorizer.assign(name)))
        .collect()
}
