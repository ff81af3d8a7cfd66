//! Testing utilities for contract batches.
//!
//! This module provides:
//! - Mock contracts with call tracking and configurable latency
//! - Assertions over outcomes and batches

mod assertions;
mod mocks;

pub use assertions::{
    assert_batch_aligned, assert_outcome_failed, assert_outcome_passed,
};
pub use mocks::{FailingContract, MockContract, PassingContract};
