use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The durable key/value backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageConfig {
    /// Nothing survives the process; handy for tests and one-shot runs.
    #[serde(rename = "memory")]
    Memory,
    /// A JSON object on disk, rewritten on every change.
    #[serde(rename = "file")]
    File { path: PathBuf },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: PathBuf::from("./itam-storage.json"),
        }
    }
}
