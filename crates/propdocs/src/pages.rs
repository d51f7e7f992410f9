//! Documentation pages and the components they demo.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::discovery::find_markdown;
use crate::error::{DocsError, Result};

static HEADER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---[\r\n]([\s\S]*)[\r\n]---").expect("valid regex"));

static HEADER_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?): (.*)").expect("valid regex"));

/// One markdown page of the documentation corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMarkdown {
    /// Route of the page, e.g. `/components/buttons`.
    pub pathname: String,
    pub filename: PathBuf,
    /// Components listed in the page header, sorted.
    pub components: Vec<String>,
}

/// Components listed in the `components:` entry of the `---` header block.
pub fn header_components(path: &Path, markdown: &str) -> Result<Vec<String>> {
    let header = HEADER_BLOCK
        .captures(markdown)
        .ok_or_else(|| DocsError::PageLookup {
            path: path.to_path_buf(),
        })?;

    let mut components = Vec::new();
    for entry in HEADER_ENTRY.captures_iter(&header[1]) {
        if &entry[1] == "components" {
            components = entry[2]
                .split(',')
                .map(|component| component.trim().to_string())
                .filter(|component| !component.is_empty())
                .collect();
        }
    }
    components.sort();
    Ok(components)
}

/// Route of a markdown file: its path below the pages directory without
/// the extension, cut to the first two segments.
pub fn page_pathname(pages_dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(pages_dir).unwrap_or(file);
    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let pathname = format!("/{}", joined.replacen(".md", "", 1));
    pathname.split('/').take(3).collect::<Vec<_>>().join("/")
}

/// Read-only index of the documentation pages, built once per run.
#[derive(Debug, Clone, Default)]
pub struct DocumentationPageIndex {
    pages: Vec<PageMarkdown>,
}

impl DocumentationPageIndex {
    pub fn new(pages: Vec<PageMarkdown>) -> Self {
        Self { pages }
    }

    /// Index every `*.md` file under `pages_dir`.
    ///
    /// A missing directory yields an empty index; pages without a header
    /// block list no components.
    pub fn build(pages_dir: &Path) -> Result<Self> {
        if !pages_dir.is_dir() {
            warn!(pages = %pages_dir.display(), "pages directory not found, usedInPages will be empty");
            return Ok(Self::default());
        }

        let mut pages = Vec::new();
        for filename in find_markdown(pages_dir)? {
            let markdown = fs::read_to_string(&filename).map_err(|error| DocsError::Io {
                path: filename.clone(),
                error,
            })?;
            let components = match header_components(&filename, &markdown) {
                Ok(components) => components,
                Err(error) => {
                    warn!(%error, "page lists no components");
                    Vec::new()
                }
            };
            pages.push(PageMarkdown {
                pathname: page_pathname(pages_dir, &filename),
                filename,
                components,
            });
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Sorted, de-duplicated routes of the pages demoing `component`.
    pub fn pages_of(&self, component: &str) -> Vec<String> {
        let mut pathnames: Vec<String> = self
            .pages
            .iter()
            .filter(|page| page.components.iter().any(|name| name == component))
            .map(|page| page.pathname.clone())
            .collect();
        pathnames.sort();
        pathnames.dedup();
        pathnames
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_the_header_component_list() {
        let markdown = "---\ntitle: Button React component\ncomponents: ButtonBase, Button, IconButton\n---\n\n# Button\n";
        let components = header_components(Path::new("buttons.md"), markdown).unwrap();
        assert_eq!(components, vec!["Button", "ButtonBase", "IconButton"]);
    }

    #[test]
    fn header_without_components() {
        let markdown = "---\ntitle: Getting started\n---\n";
        assert!(header_components(Path::new("a.md"), markdown).unwrap().is_empty());
    }

    #[test]
    fn missing_header_is_a_page_lookup_error() {
        let err = header_components(Path::new("a.md"), "# Title\n").unwrap_err();
        assert!(matches!(err, DocsError::PageLookup { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn pathname_keeps_two_segments() {
        let pages = Path::new("/docs/src/pages");
        assert_eq!(
            page_pathname(pages, Path::new("/docs/src/pages/components/buttons/buttons.md")),
            "/components/buttons"
        );
        assert_eq!(
            page_pathname(pages, Path::new("/docs/src/pages/discover-more/team.md")),
            "/discover-more/team"
        );
    }

    #[test]
    fn builds_a_sorted_deduplicated_index() {
        let dir = TempDir::new().unwrap();
        let write = |relative: &str, content: &str| {
            let path = dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        };
        write(
            "components/buttons/buttons.md",
            "---\ncomponents: Button, ButtonGroup\n---\n",
        );
        write(
            "components/buttons/buttons-de.md",
            "---\ncomponents: Button\n---\n",
        );
        write("components/badges/badges.md", "---\ncomponents: Badge, Button\n---\n");
        write("getting-started/usage/usage.md", "# no header\n");

        let index = DocumentationPageIndex::build(dir.path()).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(
            index.pages_of("Button"),
            vec!["/components/badges", "/components/buttons"]
        );
        assert!(index.pages_of("Menu").is_empty());
    }

    #[test]
    fn missing_pages_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let index = DocumentationPageIndex::build(&dir.path().join("pages")).unwrap();
        assert!(index.is_empty());
    }
}
