//! Test assertions for validation outcomes and batches.

use crate::contract::Contract;
use crate::outcome::{ResultBatch, ValidationOutcome};
use std::sync::Arc;

/// Asserts that the outcome carries no error.
pub fn assert_outcome_passed(outcome: &ValidationOutcome) {
    assert!(
        outcome.is_pass(),
        "Expected contract '{}' to pass, got error: {:?}",
        outcome.contract_name(),
        outcome.error
    );
}

/// Asserts that the outcome carries an error.
pub fn assert_outcome_failed(outcome: &ValidationOutcome) {
    assert!(
        outcome.is_fail(),
        "Expected contract '{}' to fail, but it passed",
        outcome.contract_name()
    );
}

/// Asserts that the batch holds one outcome per input contract, in input
/// order, each referencing the contract it was produced for.
pub fn assert_batch_aligned(batch: &ResultBatch, contracts: &[Arc<dyn Contract>]) {
    assert_eq!(
        batch.len(),
        contracts.len(),
        "Expected {} outcomes, got {}",
        contracts.len(),
        batch.len()
    );
    for (i, contract) in contracts.iter().enumerate() {
        assert!(
            Arc::ptr_eq(&batch[i].contract, contract),
            "Outcome {} references contract '{}', expected '{}'",
            i,
            batch[i].contract_name(),
            contract.name()
        );
    }
}
