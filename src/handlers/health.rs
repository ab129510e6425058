//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.model.loaded,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::testing::send;

    #[tokio::test]
    async fn test_health_ok() {
        let (status, body) = send("GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "model_loaded": false}));
    }

    #[tokio::test]
    async fn test_health_rejects_post() {
        let (status, _) = send("POST", "/health", "{}").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
