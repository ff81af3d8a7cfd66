//! Contract trait and validation report types.
//!
//! Contracts are the units of work handed to a batch validation run. The
//! core never looks inside a contract: it only requires the asynchronous
//! validation capability defined here.

use crate::errors::ValidationError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;

/// What one contract's validation delivers.
///
/// Carries the free-form result fields together with the optional error,
/// replacing the `(err, result)` callback pair with a single awaitable
/// value. `ValidationReport` is immutable once created and provides factory
/// methods for the two shapes a validation can take.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Free-form result fields produced by the validation.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, serde_json::Value>,

    /// Error reported by the validation (absent on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidationReport {
    /// Creates a passing report with no fields.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            fields: HashMap::new(),
            error: None,
        }
    }

    /// Creates a passing report with result fields.
    #[must_use]
    pub fn pass_with(fields: HashMap<String, serde_json::Value>) -> Self {
        Self {
            fields,
            error: None,
        }
    }

    /// Creates a passing report with a single field.
    #[must_use]
    pub fn pass_value(key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut fields = HashMap::new();
        fields.insert(key.into(), value);
        Self::pass_with(fields)
    }

    /// Creates a failing report.
    #[must_use]
    pub fn fail(error: impl Into<ValidationError>) -> Self {
        Self {
            fields: HashMap::new(),
            error: Some(error.into()),
        }
    }

    /// Creates a failing report that still carries result fields.
    #[must_use]
    pub fn fail_with(
        error: impl Into<ValidationError>,
        fields: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            fields,
            error: Some(error.into()),
        }
    }

    /// Returns true if the report carries no error.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if the report carries an error.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.error.is_some()
    }
}

/// Trait for validatable contracts.
///
/// Implementations signal failure through the report's error field, never
/// by panicking: a validation that cannot be carried out still delivers a
/// report. A capability that panics or never completes is out of contract.
#[async_trait]
pub trait Contract: Send + Sync + Debug {
    /// Returns the name of the contract, used for reporting context.
    fn name(&self) -> &str;

    /// Runs the contract's validation and delivers its report.
    async fn validate(&self) -> ValidationReport;
}

/// A contract backed by an async closure.
pub struct FnContract {
    name: String,
    func: Box<dyn Fn() -> BoxFuture<'static, ValidationReport> + Send + Sync>,
}

impl FnContract {
    /// Creates a new closure-based contract.
    pub fn new<F, Fut>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ValidationReport> + Send + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(move || -> BoxFuture<'static, ValidationReport> {
                Box::pin(func())
            }),
        }
    }
}

impl Debug for FnContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnContract")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl Contract for FnContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(&self) -> ValidationReport {
        (self.func)().await
    }
}
