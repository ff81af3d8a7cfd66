//! Per-contract outcomes and the ordered result batch.

use crate::contract::{Contract, ValidationReport};
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// The annotated result of validating one contract.
///
/// Merges the fields and optional error delivered by the contract's
/// validation with a shared handle back to the originating contract and
/// the timing of the validation.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Handle to the originating contract (reporting context only).
    pub contract: Arc<dyn Contract>,
    /// Result fields delivered by the validation.
    pub fields: HashMap<String, serde_json::Value>,
    /// Error delivered by the validation (absent on pass).
    pub error: Option<ValidationError>,
    /// When the validation started.
    pub started_at: DateTime<Utc>,
    /// When the validation ended.
    pub ended_at: DateTime<Utc>,
}

impl ValidationOutcome {
    /// Builds an outcome by merging a delivered report with its contract.
    #[must_use]
    pub fn from_report(
        contract: Arc<dyn Contract>,
        report: ValidationReport,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            contract,
            fields: report.fields,
            error: report.error,
            started_at,
            ended_at,
        }
    }

    /// Returns the name of the originating contract.
    #[must_use]
    pub fn contract_name(&self) -> &str {
        self.contract.name()
    }

    /// Returns true if the contract passed validation.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if the contract failed validation.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the validation duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.error.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("ValidationOutcome", len)?;
        state.serialize_field("contract", self.contract.name())?;
        state.serialize_field("fields", &self.fields)?;
        if let Some(ref error) = self.error {
            state.serialize_field("error", error)?;
        }
        state.serialize_field("started_at", &self.started_at)?;
        state.serialize_field("ended_at", &self.ended_at)?;
        state.end()
    }
}

/// The ordered collection of outcomes produced by one batch run.
///
/// Holds exactly one outcome per input contract, in input order. A batch is
/// constructed fresh per run and fully populated before it is handed out.
#[derive(Debug, Clone, Serialize)]
pub struct ResultBatch {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    outcomes: Vec<ValidationOutcome>,
}

impl ResultBatch {
    pub(crate) fn new(
        run_id: Uuid,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        outcomes: Vec<ValidationOutcome>,
    ) -> Self {
        Self {
            run_id,
            started_at,
            ended_at,
            outcomes,
        }
    }

    /// Returns the unique ID of the batch run.
    #[must_use]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Returns when the batch run started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the total batch duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }

    /// Returns the number of outcomes in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if the batch holds no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the outcomes in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    /// Returns the outcome at the given position, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ValidationOutcome> {
        self.outcomes.get(index)
    }

    /// Iterates over the outcomes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationOutcome> {
        self.outcomes.iter()
    }

    /// Iterates over the outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationOutcome> {
        self.outcomes.iter().filter(|o| o.is_fail())
    }

    /// Consumes the batch, returning the outcomes.
    #[must_use]
    pub fn into_outcomes(self) -> Vec<ValidationOutcome> {
        self.outcomes
    }

    /// Produces a reporting summary over the batch.
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        let failed = self.outcomes.iter().filter(|o| o.is_fail()).count();
        BatchSummary {
            total: self.outcomes.len(),
            passed: self.outcomes.len() - failed,
            failed,
        }
    }
}

impl std::ops::Index<usize> for ResultBatch {
    type Output = ValidationOutcome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.outcomes[index]
    }
}

impl<'a> IntoIterator for &'a ResultBatch {
    type Item = &'a ValidationOutcome;
    type IntoIter = std::slice::Iter<'a, ValidationOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

impl IntoIterator for ResultBatch {
    type Item = ValidationOutcome;
    type IntoIter = std::vec::IntoIter<ValidationOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

/// Aggregate counts over a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Total number of contracts validated.
    pub total: usize,
    /// Number of contracts that passed.
    pub passed: usize,
    /// Number of contracts that failed.
    pub failed: usize,
}

impl BatchSummary {
    /// Returns the fraction of contracts that passed.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64
    }

    /// Returns true if any contract failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
