//! Batch validation of contracts.
//!
//! The validator awaits each contract's validation capability one at a
//! time, in input order, and merges every delivered report into an ordered
//! [`ResultBatch`]. Per-contract failures are captured inside their outcome
//! and never abort the run: `validate_all` is infallible by type, so there
//! is no batch-level error slot to populate.

use crate::contract::Contract;
use crate::events::{get_event_sink, EventSink};
use crate::outcome::{ResultBatch, ValidationOutcome};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Validates ordered batches of contracts, one contract at a time.
pub struct BatchValidator {
    event_sink: Arc<dyn EventSink>,
}

impl BatchValidator {
    /// Creates a validator wired to the process-global event sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_sink: get_event_sink(),
        }
    }

    /// Creates a validator with an explicit event sink.
    #[must_use]
    pub fn with_sink(event_sink: Arc<dyn EventSink>) -> Self {
        Self { event_sink }
    }

    /// Validates all contracts in input order and returns the batch.
    ///
    /// Returns exactly one outcome per input contract, in input order, each
    /// holding a handle to the contract it was produced for. Returning the
    /// batch is the single completion signal: it happens exactly once, after
    /// the batch is fully populated, for any finite input including the
    /// empty one.
    pub async fn validate_all(&self, contracts: &[Arc<dyn Contract>]) -> ResultBatch {
        let run_id = Uuid::new_v4();
        let batch_started = Utc::now();
        let mut outcomes = Vec::with_capacity(contracts.len());

        self.event_sink
            .emit(
                "batch.started",
                Some(serde_json::json!({
                    "run_id": run_id,
                    "total": contracts.len(),
                })),
            )
            .await;

        // Strictly sequential: the next contract's validation is not
        // started until the current one's report is observed.
        for (index, contract) in contracts.iter().enumerate() {
            debug!(contract = %contract.name(), index, "validating contract");

            let started_at = Utc::now();
            let report = contract.validate().await;
            let ended_at = Utc::now();

            let outcome =
                ValidationOutcome::from_report(Arc::clone(contract), report, started_at, ended_at);

            let event_type = if outcome.is_pass() {
                "contract.passed"
            } else {
                "contract.failed"
            };
            self.event_sink
                .emit(
                    event_type,
                    Some(serde_json::json!({
                        "contract": contract.name(),
                        "index": index,
                        "duration_ms": outcome.duration_ms(),
                        "error": &outcome.error,
                    })),
                )
                .await;

            outcomes.push(outcome);
        }

        let batch = ResultBatch::new(run_id, batch_started, Utc::now(), outcomes);
        let summary = batch.summary();

        info!(
            run_id = %run_id,
            total = summary.total,
            failed = summary.failed,
            duration_ms = batch.duration_ms(),
            "contract batch complete"
        );
        self.event_sink
            .emit(
                "batch.completed",
                Some(serde_json::json!({
                    "run_id": run_id,
                    "total": summary.total,
                    "failed": summary.failed,
                    "duration_ms": batch.duration_ms(),
                })),
            )
            .await;

        batch
    }
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates all contracts with a default [`BatchValidator`].
pub async fn validate_contracts(contracts: &[Arc<dyn Contract>]) -> ResultBatch {
    BatchValidator::new().validate_all(contracts).await
}
