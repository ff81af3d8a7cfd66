//! Error types for contract validation.
//!
//! There is exactly one captured failure kind: a per-contract validation
//! error, carried inline inside that contract's outcome. Errors never abort
//! a batch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// An error reported by a contract's validation capability.
///
/// Replaces the loosely typed error slot of callback-style validation with
/// an explicit, serializable value. Absence means the contract passed.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Machine-readable error code (e.g., "SCHEMA_MISMATCH").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Additional context key-value pairs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, serde_json::Value>,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: HashMap::new(),
        }
    }

    /// Sets the error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Adds a single detail entry.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let err = ValidationError::new("schema mismatch")
            .with_code("SCHEMA_MISMATCH")
            .with_detail("path", serde_json::json!("$.body.id"));

        assert_eq!(err.message, "schema mismatch");
        assert_eq!(err.code, Some("SCHEMA_MISMATCH".to_string()));
        assert_eq!(err.details.get("path"), Some(&serde_json::json!("$.body.id")));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("missing required field");
        assert_eq!(err.to_string(), "missing required field");
    }

    #[test]
    fn test_validation_error_from_str() {
        let err: ValidationError = "bad response".into();
        assert_eq!(err.message, "bad response");
        assert!(err.code.is_none());
    }

    #[test]
    fn test_validation_error_serialization() {
        let err = ValidationError::new("schema mismatch").with_code("SCHEMA_MISMATCH");

        let json = serde_json::to_string(&err).unwrap();
        let deserialized: ValidationError = serde_json::from_str(&json).unwrap();

        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_validation_error_skips_empty_optionals() {
        let err = ValidationError::new("plain");
        let json = serde_json::to_value(&err).unwrap();

        assert!(json.get("code").is_none());
        assert!(json.get("details").is_none());
    }
}
