//! Prediction request/response models

use serde::Serialize;
use serde_json::{Map, Value};

/// Advisory attached to every mock prediction
pub const MOCK_NOTES: &str =
    "mock prediction (dev-only). Replace MODEL with real artifact for production.";

/// Shape of the `features` field, resolved once during validation
#[derive(Debug, Clone, PartialEq)]
pub enum Features {
    /// Ordered features, first element is the credit limit
    Sequence(Vec<Value>),
    /// Named features
    Named(Map<String, Value>),
    /// Anything else (string, number, bool)
    Invalid(Value),
}

impl From<Value> for Features {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Features::Sequence(values),
            Value::Object(map) => Features::Named(map),
            other => Features::Invalid(other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PredictionRequest {
    pub features: Option<Features>,
}

impl From<Map<String, Value>> for PredictionRequest {
    /// Unknown keys are ignored; `null` features count as absent.
    fn from(mut body: Map<String, Value>) -> Self {
        let features = match body.remove("features") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Features::from(value)),
        };
        Self { features }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub default_prediction: u8,
    pub probability: f64,
    pub confidence: f64,
    pub severity: Severity,
    pub model_version: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(body: Value) -> PredictionRequest {
        match body {
            Value::Object(map) => PredictionRequest::from(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_features_shapes() {
        let req = decode(json!({"features": [1, 2, 3]}));
        assert!(matches!(req.features, Some(Features::Sequence(ref v)) if v.len() == 3));

        let req = decode(json!({"features": {"limitBal": 5000}}));
        assert!(matches!(req.features, Some(Features::Named(_))));

        let req = decode(json!({"features": "abc"}));
        assert_eq!(req.features, Some(Features::Invalid(json!("abc"))));

        let req = decode(json!({"features": 42}));
        assert_eq!(req.features, Some(Features::Invalid(json!(42))));
    }

    #[test]
    fn test_missing_or_null_features() {
        assert!(decode(json!({})).features.is_none());
        assert!(decode(json!({"features": null})).features.is_none());
        assert!(decode(json!({"other": 1})).features.is_none());
    }

    #[test]
    fn test_severity_serializes_as_label() {
        assert_eq!(serde_json::to_value(Severity::Medium).unwrap(), json!("Medium"));
        assert_eq!(Severity::High.to_string(), "High");
    }
}
