//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Non-empty output target
//! - Well-formed dot-separated names
//! - Non-empty static field keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::LogConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output must not be empty")]
    EmptyOutput,

    #[error("name {0:?} has an empty segment")]
    EmptyNameSegment(String),

    #[error("static field keys must not be empty")]
    EmptyFieldKey,
}

pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.output.trim().is_empty() {
        errors.push(ValidationError::EmptyOutput);
    }

    if let Some(name) = &config.name {
        if name.split('.').any(str::is_empty) {
            errors.push(ValidationError::EmptyNameSegment(name.clone()));
        }
    }

    if config.fields.keys().any(|key| key.is_empty()) {
        errors.push(ValidationError::EmptyFieldKey);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
