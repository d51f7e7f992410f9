use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::case::hyphenate;
use crate::error::{DocsError, Result};
use crate::model::StylesRecord;

/// Companion style metadata (`<data-dir>/<hyphenated-name>.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct StyleMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub css: IndexMap<String, CssClass>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CssClass {
    #[serde(default)]
    pub description: String,
}

/// Location of the metadata file for `component`.
pub fn metadata_path(data_dir: &Path, component: &str) -> PathBuf {
    data_dir.join(format!("{}.json", hyphenate(component)))
}

/// Reads the companion metadata into a style record without generated
/// class names.
///
/// Any failure is a [`DocsError::StyleResolution`].
pub fn read_style_metadata(data_dir: &Path, component: &str) -> Result<StylesRecord> {
    let path = metadata_path(data_dir, component);
    let content = fs::read_to_string(&path).map_err(|error| DocsError::StyleResolution {
        path: path.clone(),
        message: error.to_string(),
    })?;
    let metadata: StyleMetadata =
        serde_json::from_str(&content).map_err(|error| DocsError::StyleResolution {
            path: path.clone(),
            message: error.to_string(),
        })?;

    Ok(StylesRecord {
        class_names: metadata.css.keys().cloned().collect(),
        source_name: metadata.name,
        descriptions: metadata
            .css
            .into_iter()
            .map(|(class, css)| (class, css.description))
            .collect(),
        generated_class_names: IndexMap::new(),
    })
}
