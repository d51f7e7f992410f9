use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// State classes that the styling runtime exposes under a global name.
pub const DEFAULT_PSEUDO_CLASSES: &[&str] = &[
    "checked",
    "disabled",
    "error",
    "focused",
    "focusVisible",
    "required",
    "expanded",
    "selected",
];

/// Computes the concrete class names the styling runtime generates.
///
/// Sheets named `Mui*` get stable global names (`MuiButton-root`, or
/// `Mui-disabled` for state classes); other sheets get `<key>-<n>` where
/// `n` is the 1-based position of the class in its sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassNameGenerator {
    pub seed: String,
    pub disable_global: bool,
    pub pseudo_classes: Vec<String>,
}

impl Default for ClassNameGenerator {
    fn default() -> Self {
        Self {
            seed: String::new(),
            disable_global: false,
            pseudo_classes: DEFAULT_PSEUDO_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
        }
    }
}

impl ClassNameGenerator {
    /// Class name for `key`, the `position`-th (1-based) rule of the sheet.
    pub fn generate(&self, sheet_name: Option<&str>, key: &str, position: usize) -> String {
        let seed_prefix = if self.seed.is_empty() {
            String::new()
        } else {
            format!("{}-", self.seed)
        };

        if let Some(name) = sheet_name.filter(|name| name.starts_with("Mui")) {
            if !self.disable_global {
                if self.pseudo_classes.iter().any(|pseudo| pseudo == key) {
                    return format!("Mui-{key}");
                }
                return format!("{seed_prefix}{name}-{key}");
            }
        }

        format!("{seed_prefix}{key}-{position}")
    }

    /// Generated names for every class, in sheet order.
    pub fn generate_all(
        &self,
        sheet_name: Option<&str>,
        class_names: &[String],
    ) -> IndexMap<String, String> {
        class_names
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), self.generate(sheet_name, key, index + 1)))
            .collect()
    }
}
