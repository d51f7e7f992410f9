use std::path::PathBuf;

use indexmap::IndexMap;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_pages_dir() -> PathBuf {
    PathBuf::from("docs/src/pages")
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("docs/data")
}

pub fn default_api_route() -> String {
    propdocs::inheritance::DEFAULT_API_ROUTE.to_string()
}

pub fn default_style_delegates() -> IndexMap<String, String> {
    propdocs::styles::default_style_delegates()
}

/// CPU count, capped at 8.
pub fn default_max_parallel() -> usize {
    num_cpus::get().min(8)
}
