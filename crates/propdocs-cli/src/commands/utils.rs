//! Path and output-directory helpers shared by the commands.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result, ResultExt};

/// `path` if absolute, else `cwd/path`.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve component directories against `cwd`, failing on the first one
/// that does not exist.
pub fn resolve_component_dirs(dirs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    dirs.iter()
        .map(|dir| {
            let dir = resolve_path(dir, cwd);
            let metadata = fs::metadata(&dir).with_path(&dir)?;
            if !metadata.is_dir() {
                return Err(CliError::InvalidArgument(format!(
                    "Component path is not a directory: {}",
                    dir.display()
                )));
            }
            Ok(dir)
        })
        .collect()
}

/// Empty `dir`, creating it when missing. Only the directory's contents are
/// removed.
pub fn clear_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_path(dir)?;
        return Ok(());
    }
    if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        )));
    }

    for entry in fs::read_dir(dir).with_path(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).with_path(&path)?;
        } else {
            fs::remove_file(&path).with_path(&path)?;
        }
    }
    Ok(())
}

/// Create `dir` unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(dir).with_path(dir)
}

/// Current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}
