//! Listener and backend configuration types.

use serde::Deserialize;

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Address the gateway listens on.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "localhost:8000".to_string(),
        }
    }
}

/// Configuration for one gRPC backend.
///
/// `endpoint` is where the backend listens and where the gateway dials it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    /// sqlx database URL.
    pub database: String,
    /// Fill an empty store with random demo rows on first start.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_seed_demo_data() -> bool {
    true
}

impl BackendConfig {
    pub fn racing() -> Self {
        Self {
            endpoint: "localhost:9000".to_string(),
            database: "sqlite:racing.db?mode=rwc".to_string(),
            seed_demo_data: true,
        }
    }

    pub fn sports() -> Self {
        Self {
            endpoint: "localhost:10000".to_string(),
            database: "sqlite:sports.db?mode=rwc".to_string(),
            seed_demo_data: true,
        }
    }
}
