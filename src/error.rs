//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Field-level schema validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Client input errors. Every variant maps to HTTP 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request")]
    InvalidRequest(Vec<FieldError>),

    #[error("No features provided")]
    NoFeatures,

    #[error("Empty features list")]
    EmptyFeatures,

    #[error("Invalid 'features' type (expect list or object)")]
    InvalidFeaturesType,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::InvalidRequest(details) => {
                tracing::warn!("validation error: {:?}", details);
                json!({
                    "error": self.to_string(),
                    "details": details,
                })
            }
            _ => {
                tracing::debug!("rejected request: {}", self);
                json!({ "error": self.to_string() })
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
