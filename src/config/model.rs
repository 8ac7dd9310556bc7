use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default location of the JSON snapshot, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".promo-admin/store.json";

/// Where records are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// `text`, `json` or `markdown`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    /// `all`, `region`, `type` or `none`.
    #[serde(default = "default_group_by")]
    pub group_by: String,

    /// `first-seen`, `key` or `total`.
    #[serde(default = "default_order")]
    pub order: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            group_by: default_group_by(),
            order: default_order(),
        }
    }
}

/// Defaults for `codes add` when `--type`/`--region` are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub codes: CodesConfig,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_format() -> String {
    "text".to_string()
}

fn default_group_by() -> String {
    "all".to_string()
}

fn default_order() -> String {
    "first-seen".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
