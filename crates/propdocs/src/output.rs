//! Artifact layout of a batch run.
//!
//! ```text
//! <out>/components/<Name>.json
//! <out>/translations/<Name>/<Name>.json
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{DocsError, Result};
use crate::model::ComponentApiData;

pub const COMPONENTS_DIR: &str = "components";
pub const TRANSLATIONS_DIR: &str = "translations";

/// Pretty-printed JSON with a trailing newline.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|error| DocsError::Serialize { error })?;
    json.push('\n');
    Ok(json)
}

/// Output directory of a batch run.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    pub fn translations_dir(&self) -> PathBuf {
        self.root.join(TRANSLATIONS_DIR)
    }

    /// Deletes translation directories whose name is not in `keep`.
    ///
    /// Returns the removed names, sorted.
    pub fn prune_stale_translations(&self, keep: &BTreeSet<String>) -> Result<Vec<String>> {
        let dir = self.translations_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|error| DocsError::Io {
            path: dir.clone(),
            error,
        })?;
        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| DocsError::Io {
                path: dir.clone(),
                error,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if keep.contains(&name) {
                continue;
            }
            fs::remove_dir_all(&path).map_err(|error| DocsError::Io {
                path: path.clone(),
                error,
            })?;
            info!(directory = %name, "removed API translation directory");
            removed.push(name);
        }
        removed.sort();
        Ok(removed)
    }

    /// Writes the API record and the flat translation map of one component.
    pub fn write(&self, data: &ComponentApiData) -> Result<()> {
        let name = &data.api.name;
        write_file(
            &self.components_dir().join(format!("{name}.json")),
            &render_json(&data.api)?,
        )?;

        let translation_dir = self.translations_dir().join(name);
        fs::create_dir_all(&translation_dir).map_err(|error| DocsError::Io {
            path: translation_dir.clone(),
            error,
        })?;
        write_file(
            &translation_dir.join(format!("{name}.json")),
            &render_json(&data.i18n_json)?,
        )
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| DocsError::Io {
            path: parent.to_path_buf(),
            error,
        })?;
    }
    fs::write(path, contents).map_err(|error| DocsError::Io {
        path: path.to_path_buf(),
        error,
    })
}
