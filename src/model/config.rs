use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from listkeep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where each app keeps its data, relative to the working directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            tasks_file: default_tasks_file(),
            contacts_file: default_contacts_file(),
        }
    }
}

fn default_tasks_file() -> String {
    "tasks.json".into()
}

fn default_contacts_file() -> String {
    "contacts.json".into()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Color overrides for the windowed UI, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
