//! Feature Normalization
//!
//! Reduces a `features` payload to a single optional credit-limit signal.
//! Never fails: anything that cannot be read as a number yields `None`.

use serde_json::Value;

use crate::models::Features;

/// Candidate keys for named features, scanned in order (case-sensitive).
/// Only the first key present is used.
pub const CREDIT_LIMIT_KEYS: [&str; 4] = ["limitBal", "limit", "credit_limit", "limit_bal"];

/// Coerce a JSON value to `f64`
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => strip_digit_underscores(s.trim())?.parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Drop `_` digit separators (`5_000`). An underscore anywhere other than
/// between two digits makes the string unparsable.
fn strip_digit_underscores(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !(prev_digit && next_digit) {
            return None;
        }
    }

    Some(out)
}

/// Extract the credit-limit signal from validated features
pub fn credit_limit(features: &Features) -> Option<f64> {
    match features {
        Features::Named(map) => CREDIT_LIMIT_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(coerce_f64),
        Features::Sequence(values) => values.first().and_then(coerce_f64),
        Features::Invalid(_) => None,
    }
}
