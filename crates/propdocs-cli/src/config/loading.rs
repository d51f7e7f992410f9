use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::Serialize;

use crate::cli::Cli;
use crate::config::PropdocsConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory.
pub const CONFIG_FILE: &str = "propdocs.toml";

/// Prefix of the environment overrides (`PROPDOCS_PAGES_DIR`, ...).
pub const ENV_PREFIX: &str = "PROPDOCS_";

/// Scalar keys settable from the environment.
const ENV_KEYS: &[&str] = &[
    "root",
    "pages_dir",
    "data_dir",
    "max_parallel",
    "api_route",
];

/// `PAGES_DIR` → `pagesDir`.
pub(crate) fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    for (index, part) in key.split('_').filter(|part| !part.is_empty()).enumerate() {
        let part = part.to_ascii_lowercase();
        if index == 0 {
            field.push_str(&part);
        } else {
            field.push_str(&propdocs::case::upper_first(&part));
        }
    }
    field
}

/// Only the flags the user actually passed; `None` leaves lower layers alone.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_parallel: Option<usize>,
}

impl CliOverrides {
    fn from_cli(args: &Cli) -> Self {
        Self {
            root: args.root.clone(),
            pages_dir: args.pages_dir.clone(),
            data_dir: args.data_dir.clone(),
            max_parallel: args.max_parallel,
        }
    }
}

impl PropdocsConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &Cli, cwd: &Path) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => {
                let path = crate::commands::utils::resolve_path(path, cwd);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        Self::figment(config_file.as_deref(), &CliOverrides::from_cli(args))
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: e
                        .path
                        .last()
                        .cloned()
                        .unwrap_or_else(|| "configuration".to_string()),
                    value: e.to_string(),
                    hint: format!("Check {} syntax and field types", CONFIG_FILE),
                }
                .into()
            })
    }

    fn figment(config_file: Option<&Path>, overrides: &CliOverrides) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .only(ENV_KEYS)
                    .lowercase(false)
                    .map(|key| env_key_to_field(key.as_str()).into()),
            )
            .merge(Serialized::defaults(overrides))
    }
}
