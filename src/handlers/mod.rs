//! HTTP handlers

pub mod health;
pub mod metadata;
pub mod predict;

#[cfg(test)]
pub(crate) mod testing {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{config::Config, create_router, AppState};

    /// Send one request through a freshly built router
    pub async fn send_with(
        config: Config,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Vec<u8>) {
        let app = create_router(AppState::new(config));

        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send(method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let (status, bytes) =
            send_with(Config::default(), method, uri, Some("application/json"), body).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
