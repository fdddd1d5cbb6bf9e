use serde::{Deserialize, Serialize};

use crate::index::IndexOptions;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// Absent unless the file has an `[index]` section, so merging can tell the two apart.
    #[serde(default)]
    pub index: Option<IndexOptions>,
}

impl Config {
    pub fn index_options(&self) -> IndexOptions {
        self.index.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub admin_username: String,
    #[serde(default)]
    pub admin_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Path to the two-column (name, score) CSV file.
    #[serde(default)]
    pub path: String,
    /// Single-byte field delimiter. Defaults to ",".
    #[serde(default)]
    pub delimiter: String,
    /// Absent means no header row; kept optional so merging can tell it was unset.
    #[serde(default)]
    pub has_headers: Option<bool>,
}

impl DataConfig {
    pub fn has_headers(&self) -> bool {
        self.has_headers.unwrap_or(false)
    }
}

/// `GET /{prefix}` response body.
#[derive(Debug, Serialize)]
pub struct QueryResults {
    pub result: Vec<crate::index::Suggestion>,
}

/// Index stats.
#[derive(Debug, Serialize)]
pub struct Stats {
    pub records: usize,
    pub entries: usize,
    pub loaded_at: String,
    pub version: String,
}
