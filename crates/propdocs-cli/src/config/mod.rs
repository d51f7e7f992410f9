//! Configuration system for propdocs with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use propdocs::{ClassNameGenerator, Theme};
use serde::{Deserialize, Serialize};

pub use defaults::*;
pub use loading::{CONFIG_FILE, ENV_PREFIX};

/// propdocs configuration - loaded from propdocs.toml, `PROPDOCS_*`
/// variables and CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropdocsConfig {
    /// Repository root; API filenames are relative to it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Documentation pages directory, relative to `root` unless absolute
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Companion style metadata directory, relative to `root` unless absolute
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Concurrent component builds; defaults to the CPU count capped at 8
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<usize>,

    /// Route prefix of the generated API pages
    #[serde(default = "default_api_route")]
    pub api_route: String,

    /// Components whose style sheet lives in a sibling component
    #[serde(default = "default_style_delegates")]
    pub style_delegates: IndexMap<String, String>,

    /// Breakpoints the style definitions are evaluated against
    #[serde(default)]
    pub theme: Theme,

    /// Runtime class-name generation settings
    #[serde(default)]
    pub class_names: ClassNameGenerator,
}

impl Default for PropdocsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pages_dir: default_pages_dir(),
            data_dir: default_data_dir(),
            max_parallel: None,
            api_route: default_api_route(),
            style_delegates: default_style_delegates(),
            theme: Theme::default(),
            class_names: ClassNameGenerator::default(),
        }
    }
}

impl PropdocsConfig {
    /// Permits for the worker semaphore.
    pub fn parallelism(&self) -> usize {
        self.max_parallel
            .unwrap_or_else(default_max_parallel)
            .max(1)
    }

    /// `root` resolved against `cwd`.
    pub fn root_dir(&self, cwd: &Path) -> PathBuf {
        crate::commands::utils::resolve_path(&self.root, cwd)
    }

    /// `pagesDir` resolved against the root.
    pub fn pages_dir(&self, cwd: &Path) -> PathBuf {
        crate::commands::utils::resolve_path(&self.pages_dir, &self.root_dir(cwd))
    }

    /// `dataDir` resolved against the root.
    pub fn data_dir(&self, cwd: &Path) -> PathBuf {
        crate::commands::utils::resolve_path(&self.data_dir, &self.root_dir(cwd))
    }
}
