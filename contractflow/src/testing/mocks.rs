//! Mock contracts for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

use crate::contract::{Contract, ValidationReport};
use crate::errors::ValidationError;

/// A mock contract that records calls and returns a configurable report.
///
/// Tracks how many validations ran and how many were in flight at once,
/// which lets tests observe that batch execution is strictly sequential.
#[derive(Debug)]
pub struct MockContract {
    name: String,
    report: Mutex<ValidationReport>,
    delay: Option<Duration>,
    call_count: Mutex<usize>,
    in_flight: Mutex<usize>,
    max_in_flight: Mutex<usize>,
}

impl MockContract {
    /// Creates a new mock contract with a passing report.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            report: Mutex::new(ValidationReport::pass()),
            delay: None,
            call_count: Mutex::new(0),
            in_flight: Mutex::new(0),
            max_in_flight: Mutex::new(0),
        }
    }

    /// Sets an artificial validation latency.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the report to return.
    pub fn set_report(&self, report: ValidationReport) {
        *self.report.lock() = report;
    }

    /// Returns the number of times the contract was validated.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns the highest number of concurrently running validations seen.
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        *self.max_in_flight.lock()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        *self.call_count.lock() = 0;
        *self.in_flight.lock() = 0;
        *self.max_in_flight.lock() = 0;
    }
}

#[async_trait]
impl Contract for MockContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(&self) -> ValidationReport {
        {
            let mut in_flight = self.in_flight.lock();
            *in_flight += 1;
            let mut max = self.max_in_flight.lock();
            if *in_flight > *max {
                *max = *in_flight;
            }
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        *self.call_count.lock() += 1;
        *self.in_flight.lock() -= 1;
        self.report.lock().clone()
    }
}

/// A contract that always passes, with optional result fields.
#[derive(Debug)]
pub struct PassingContract {
    name: String,
    fields: HashMap<String, serde_json::Value>,
}

impl PassingContract {
    /// Creates a new passing contract.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Creates a passing contract with result fields.
    #[must_use]
    pub fn with_fields(
        name: impl Into<String>,
        fields: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

#[async_trait]
impl Contract for PassingContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(&self) -> ValidationReport {
        if self.fields.is_empty() {
            ValidationReport::pass()
        } else {
            ValidationReport::pass_with(self.fields.clone())
        }
    }
}

/// A contract that always fails with a fixed error.
#[derive(Debug)]
pub struct FailingContract {
    name: String,
    error: ValidationError,
}

impl FailingContract {
    /// Creates a new failing contract.
    #[must_use]
    pub fn new(name: impl Into<String>, error: impl Into<ValidationError>) -> Self {
        Self {
            name: name.into(),
            error: error.into(),
        }
    }
}

#[async_trait]
impl Contract for FailingContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate(&self) -> ValidationReport {
        ValidationReport::fail(self.error.clone())
    }
}
