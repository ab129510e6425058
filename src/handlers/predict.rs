//! Prediction handler

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde_json::{Map, Value};

use crate::error::FieldError;
use crate::logic::{credit_limit, evaluate, round4};
use crate::models::{Features, PredictionRequest, PredictionResponse, MOCK_NOTES};
use crate::{AppError, AppResult, AppState};

/// Score a feature payload with the mock rule
pub async fn predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<PredictionResponse>> {
    let payload = decode_payload(&headers, &body);
    tracing::debug!("payload: {}", payload);

    let request = validate(payload)?;
    let features = require_features(request)?;

    let eval = evaluate(credit_limit(&features));

    let response = PredictionResponse {
        default_prediction: eval.default_prediction,
        probability: round4(eval.probability),
        confidence: round4(eval.confidence),
        severity: eval.severity,
        model_version: state.model.response_version().to_string(),
        notes: MOCK_NOTES.to_string(),
    };

    tracing::info!(
        "predict -> default_prediction={} probability={} severity={}",
        response.default_prediction,
        response.probability,
        response.severity
    );

    Ok(Json(response))
}

// Helper functions

/// Decode the body as JSON. Non-JSON content, undecodable bodies and empty
/// values (`null`, `false`, `0`, `""`, `[]`) all become an empty object.
fn decode_payload(headers: &HeaderMap, body: &[u8]) -> Value {
    let empty = || Value::Object(Map::new());

    if !is_json_content(headers) {
        return empty();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) if is_empty_value(&value) => empty(),
        Ok(value) => value,
        Err(_) => empty(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Schema-level validation: the payload must be an object
fn validate(payload: Value) -> AppResult<PredictionRequest> {
    match payload {
        Value::Object(map) => Ok(PredictionRequest::from(map)),
        _ => Err(AppError::InvalidRequest(vec![FieldError::new(
            &["body"],
            "Input should be a valid dictionary",
            "dict_type",
        )])),
    }
}

fn require_features(request: PredictionRequest) -> AppResult<Features> {
    match request.features {
        None => Err(AppError::NoFeatures),
        Some(Features::Sequence(values)) if values.is_empty() => Err(AppError::EmptyFeatures),
        Some(Features::Invalid(value)) => {
            tracing::debug!("unsupported features value: {}", value);
            Err(AppError::InvalidFeaturesType)
        }
        Some(features) => Ok(features),
    }
}
