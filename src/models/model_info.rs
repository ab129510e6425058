//! Model registry state
//!
//! Built once at startup and never mutated afterwards.

use serde::Serialize;

use crate::config::Config;

/// Version reported when no model version is configured
pub const MOCK_MODEL_VERSION: &str = "mock-v0";

/// Read-only view of the (absent) model artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub loaded: bool,
    pub version: Option<String>,
}

impl ModelInfo {
    /// Resolve model state from configuration.
    ///
    /// This build never loads an artifact, so `loaded` is always false.
    pub fn from_config(config: &Config) -> Self {
        if let Some(path) = &config.model_path {
            tracing::warn!(
                "MODEL_PATH={} is set but model loading is not supported; serving mock predictions",
                path
            );
        }

        Self {
            loaded: false,
            version: config.model_version.clone(),
        }
    }

    /// Version string placed in prediction responses
    pub fn response_version(&self) -> &str {
        self.version.as_deref().unwrap_or(MOCK_MODEL_VERSION)
    }
}
