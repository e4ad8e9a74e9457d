//! Output directory handling.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Empty `dir`, keeping the directory itself. A missing directory is created.
///
/// # Errors
///
/// Returns `Error::OutputNotDirectory` when `dir` is a file, and I/O errors
/// from removing entries.
pub fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!(path = %dir.display(), "created output directory");
        return Ok(());
    }

    if !dir.is_dir() {
        return Err(Error::OutputNotDirectory(dir.to_path_buf()));
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }

    tracing::debug!(path = %dir.display(), removed, "emptied output directory");
    Ok(())
}
