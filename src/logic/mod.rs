//! Prediction logic
//!
//! Pure functions only: feature normalization and the mock scoring rule.

pub mod features;
pub mod rules;

pub use features::credit_limit;
pub use rules::{evaluate, round4};
