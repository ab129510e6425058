//! Service metadata handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

pub const SERVICE_NAME: &str = "credit-risk-demo";

#[derive(Serialize)]
pub struct MetadataResponse {
    service: &'static str,
    model_loaded: bool,
    model_version: Option<String>,
}

pub async fn get(State(state): State<AppState>) -> Json<MetadataResponse> {
    Json(MetadataResponse {
        service: SERVICE_NAME,
        model_loaded: state.model.loaded,
        model_version: state.model.version.clone(),
    })
}
