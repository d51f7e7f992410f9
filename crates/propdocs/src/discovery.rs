//! Locating component sources and documentation pages on disk.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{DocsError, Result};
use crate::model::ComponentSource;

static COMPONENT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Unstable_)?([A-Z][a-z]+)+\.(js|tsx)").expect("valid regex"));

/// Whether a file name follows the component naming convention
/// (`Button.js`, `ButtonBase.tsx`, `Unstable_TrapFocus.js`).
pub fn is_component_file(file_name: &str) -> bool {
    COMPONENT_FILE.is_match(file_name)
}

/// Every component source below `dir`, sorted by path.
pub fn find_components(dir: &Path) -> Result<Vec<ComponentSource>> {
    let components = walk_files(dir, |name| is_component_file(name))?
        .into_iter()
        .map(ComponentSource::new)
        .collect();
    Ok(components)
}

/// Every `*.md` file below `dir`, sorted by path.
pub fn find_markdown(dir: &Path) -> Result<Vec<PathBuf>> {
    walk_files(dir, |name| name.ends_with(".md"))
}

fn walk_files(dir: &Path, accept: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|error| DocsError::Discovery {
            path: error
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            message: error.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if accept(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn component_naming_convention() {
        assert!(is_component_file("Button.js"));
        assert!(is_component_file("ButtonBase.tsx"));
        assert!(is_component_file("Unstable_TrapFocus.js"));
        assert!(!is_component_file("index.js"));
        assert!(!is_component_file("Button.test.js"));
        assert!(!is_component_file("Button.d.ts"));
        assert!(!is_component_file("useButton.js"));
    }

    #[test]
    fn walks_nested_directories() {
        let dir = TempDir::new().unwrap();
        for file in [
            "Button/Button.js",
            "Button/Button.test.js",
            "Button/index.js",
            "Badge/Badge.tsx",
        ] {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let names: Vec<_> = find_components(dir.path())
            .unwrap()
            .into_iter()
            .map(|component| component.name)
            .collect();
        assert_eq!(names, vec!["Badge", "Button"]);
    }

    #[test]
    fn missing_directory_is_a_discovery_error() {
        let dir = TempDir::new().unwrap();
        let err = find_components(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, DocsError::Discovery { .. }));
    }
}
