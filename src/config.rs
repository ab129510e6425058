//! Configuration module

use std::env;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Debug mode (raises default log verbosity)
    pub debug: bool,

    /// Allowed CORS origins, `*` for any
    pub cors_origins: String,

    /// Path to a model artifact. Never loaded by the mock.
    pub model_path: Option<String>,

    /// Version string reported for the configured model
    pub model_version: Option<String>,

    /// Emit JSON log lines instead of plain text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(5000),

            debug: lookup("DEBUG")
                .map(|d| d.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),

            cors_origins: lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()),

            model_path: lookup("MODEL_PATH").filter(|p| !p.trim().is_empty()),

            model_version: lookup("MODEL_VERSION").filter(|v| !v.trim().is_empty()),

            log_json: lookup("LOG_FORMAT")
                .map(|f| f.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "credit_risk_demo=debug,tower_http=debug"
        } else {
            "credit_risk_demo=info,tower_http=info"
        }
    }

    /// Build the CORS layer from `cors_origins`
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.cors_origins.trim() == "*" {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();

        layer.allow_origin(AllowOrigin::list(origins))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
