//! Mock Scoring Rules & Thresholds
//!
//! Deterministic stand-in for a trained model: a single threshold on the
//! credit limit, plus fixed probability buckets for severity.

use crate::models::Severity;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Credit limits strictly below this are predicted to default
pub const CREDIT_LIMIT_THRESHOLD: f64 = 10_000.0;

/// At or above this probability = High
pub const HIGH_SEVERITY_MIN: f64 = 0.75;

/// At or above this probability = Medium (below HIGH_SEVERITY_MIN)
pub const MEDIUM_SEVERITY_MIN: f64 = 0.25;

// ============================================================================
// CANNED OUTPUTS
// ============================================================================

/// Probability when the credit limit could not be read
pub const NEUTRAL_PROBABILITY: f64 = 0.12;

/// Probability for a low credit limit
pub const DEFAULT_PROBABILITY: f64 = 0.65;

/// Probability for a sufficient credit limit
pub const NO_DEFAULT_PROBABILITY: f64 = 0.05;

pub const DEFAULT_CONFIDENCE: f64 = 0.82;
pub const NO_DEFAULT_CONFIDENCE: f64 = 0.92;

/// Outcome of the scoring rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub default_prediction: u8,
    pub probability: f64,
    pub confidence: f64,
    pub severity: Severity,
}

/// Score a credit-limit signal
pub fn evaluate(credit_limit: Option<f64>) -> Evaluation {
    // NaN compares false and lands in the no-default branch
    let (default_prediction, probability) = match credit_limit {
        None => (0, NEUTRAL_PROBABILITY),
        Some(limit) if limit < CREDIT_LIMIT_THRESHOLD => (1, DEFAULT_PROBABILITY),
        Some(_) => (0, NO_DEFAULT_PROBABILITY),
    };

    let confidence = if default_prediction == 1 {
        DEFAULT_CONFIDENCE
    } else {
        NO_DEFAULT_CONFIDENCE
    };

    Evaluation {
        default_prediction,
        probability,
        confidence,
        severity: severity_for(probability),
    }
}

/// Bucket a probability into a severity label
pub fn severity_for(probability: f64) -> Severity {
    if probability >= HIGH_SEVERITY_MIN {
        Severity::High
    } else if probability >= MEDIUM_SEVERITY_MIN {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Round to 4 decimal places
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
