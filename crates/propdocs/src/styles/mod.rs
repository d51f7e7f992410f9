//! Class-name hooks of a component.
//!
//! Components wrapped in `withStyles(styles, { name })` are evaluated
//! through a [`StyleEngine`]; everything else falls back to companion
//! metadata files in the data directory.

mod class_names;
mod engine;
mod metadata;

pub use class_names::{ClassNameGenerator, DEFAULT_PSEUDO_CLASSES};
pub use engine::{StaticStyleEngine, StyleDefinition, StyleEngine, Theme};
pub use metadata::{CssClass, StyleMetadata, metadata_path, read_style_metadata};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::error::{DocsError, Result};
use crate::model::{ComponentDoc, StylesRecord};

/// Binding used when `withStyles` is not given an identifier.
pub const DEFAULT_STYLES_BINDING: &str = "styles";

static STYLES_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export const styles.*[\r\n](.*[\r\n])*\};[\r\n][\r\n]").expect("valid regex")
});

static CLASS_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\* (.*) \*/[\r\n]\s*(\w*)").expect("valid regex"));

static INTERNAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(@media|@keyframes|@global)").expect("valid regex"));

/// Components whose styles live in a sibling component's file.
pub fn default_style_delegates() -> IndexMap<String, String> {
    IndexMap::from([("Select".to_string(), "NativeSelect".to_string())])
}

/// `/* description */` comments in front of each class of the exported
/// `styles` block.
pub fn scan_descriptions(source: &str) -> IndexMap<String, String> {
    let mut descriptions = IndexMap::new();
    if let Some(block) = STYLES_BLOCK.find(source) {
        for captures in CLASS_DESCRIPTION.captures_iter(block.as_str()) {
            descriptions.insert(captures[2].to_string(), captures[1].to_string());
        }
    }
    descriptions
}

/// Whether a rule key is an at-rule rather than a class hook.
pub fn is_internal_rule(key: &str) -> bool {
    INTERNAL_RULE.is_match(key)
}

/// Resolves the style record of one component.
#[derive(Clone)]
pub struct StyleExtractor {
    engine: Arc<dyn StyleEngine>,
    theme: Theme,
    class_names: ClassNameGenerator,
    data_dir: PathBuf,
    delegates: IndexMap<String, String>,
}

impl StyleExtractor {
    /// Static engine, default theme and generator, `Select` delegating to
    /// `NativeSelect`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine: Arc::new(StaticStyleEngine),
            theme: Theme::default(),
            class_names: ClassNameGenerator::default(),
            data_dir: data_dir.into(),
            delegates: default_style_delegates(),
        }
    }

    pub fn with_engine(mut self, engine: Arc<dyn StyleEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_class_names(mut self, class_names: ClassNameGenerator) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn with_delegates(mut self, delegates: IndexMap<String, String>) -> Self {
        self.delegates = delegates;
        self
    }

    /// Style record for component `name`, whose source is `source`.
    ///
    /// Missing metadata (or an unresolvable definition) yields an empty
    /// record; unreadable delegate sources and parse failures are errors.
    pub fn extract(&self, name: &str, doc: &ComponentDoc, source: &str) -> Result<StylesRecord> {
        let resolved = match &doc.facts.style_options {
            Some(options) => {
                let binding = options
                    .styles_binding
                    .as_deref()
                    .unwrap_or(DEFAULT_STYLES_BINDING);
                self.from_engine(name, &doc.path, source, binding)
                    .map(|mut record| {
                        record.source_name = options.sheet_name.clone();
                        record
                    })
            }
            None => read_style_metadata(&self.data_dir, name),
        };

        let mut record = match resolved {
            Ok(record) => record,
            Err(error) if !error.is_fatal() => {
                debug!(component = name, %error, "no style information");
                StylesRecord::default()
            }
            Err(error) => return Err(error),
        };

        record.generated_class_names = self
            .class_names
            .generate_all(record.source_name.as_deref(), &record.class_names);
        Ok(record)
    }

    fn from_engine(
        &self,
        name: &str,
        path: &Path,
        source: &str,
        binding: &str,
    ) -> Result<StylesRecord> {
        let delegate = self
            .delegates
            .get(name)
            .map(|sibling| {
                let sibling_path = delegate_path(path, sibling);
                fs::read_to_string(&sibling_path)
                    .map(|content| (sibling_path.clone(), content))
                    .map_err(|error| DocsError::Io {
                        path: sibling_path,
                        error,
                    })
            })
            .transpose()?;
        let (style_path, style_source) = match &delegate {
            Some((sibling_path, content)) => (sibling_path.as_path(), content.as_str()),
            None => (path, source),
        };

        let keys = self.engine.rule_keys(
            &StyleDefinition {
                path: style_path,
                source: style_source,
                binding,
            },
            &self.theme,
        )?;

        Ok(StylesRecord {
            class_names: keys.into_iter().filter(|key| !is_internal_rule(key)).collect(),
            source_name: None,
            descriptions: scan_descriptions(style_source),
            generated_class_names: IndexMap::new(),
        })
    }
}

impl std::fmt::Debug for StyleExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleExtractor")
            .field("theme", &self.theme)
            .field("class_names", &self.class_names)
            .field("data_dir", &self.data_dir)
            .field("delegates", &self.delegates)
            .finish_non_exhaustive()
    }
}

/// `<components>/Select/Select.js` → `<components>/NativeSelect/NativeSelect.js`.
fn delegate_path(path: &Path, sibling: &str) -> PathBuf {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "js".to_string());
    let components = path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    components
        .join(sibling)
        .join(format!("{sibling}.{extension}"))
}
