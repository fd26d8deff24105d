use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1/itam/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where the ITAM API lives and how long a single request may take.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request deadline; zero is rejected at load.
    pub timeout_in_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_in_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
