// src/error.rs
use thiserror::Error;

/// Failures of the scenario engine. All of them are local to the call that
/// produced them; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid input: year {0} appears more than once")]
    DuplicateYear(i32),
    #[error("parameter {name} must be non-negative, got {value}")]
    OutOfDomainParameter { name: &'static str, value: f64 },
}

impl ScenarioError {
    pub fn non_finite(name: &str, value: f64) -> Self {
        ScenarioError::InvalidInput(format!("{} is not a finite number ({})", name, value))
    }
}
