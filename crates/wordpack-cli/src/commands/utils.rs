//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use wordpack_config::env::ENGINE_WATCH_KEY;
use wordpack_config::{EnvParams, UserConfig};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Custom(format!("Failed to get current working directory: {}", e))
    })
}

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Turn project flags into invocation parameters.
///
/// `--env` pairs are applied first; the dedicated flags win over them when
/// set. `--watch` also sets `WEBPACK_WATCH`, which the resolver reads ahead
/// of `watch`. `CI` is filled in from the environment unless passed explicitly.
pub fn env_params(project: &ProjectArgs, ci: bool) -> EnvParams {
    let mut params: EnvParams = project.env.iter().cloned().collect();

    if let Some(base_path) = &project.base_path {
        params.insert("basePath", base_path.to_string_lossy());
    }
    if project.production {
        params.insert("production", "true");
    }
    if project.watch {
        params.insert("watch", "true");
        params.insert(ENGINE_WATCH_KEY, "true");
    }
    if ci && params.get("CI").is_none() {
        params.insert("CI", "true");
    }

    params
}

/// Load and validate the project configuration without touching the output.
pub async fn load_project(project: &ProjectArgs) -> Result<UserConfig> {
    let cwd = get_cwd()?;
    let params = env_params(project, ui::is_ci());
    let config = wordpack_compose::load_config(&params, &cwd, project.config.as_deref()).await?;
    Ok(config)
}
