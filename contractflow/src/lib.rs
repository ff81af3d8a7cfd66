//! # Contractflow
//!
//! Sequential batch validation for asynchronous contracts.
//!
//! Contractflow takes an ordered collection of contracts, awaits each
//! contract's validation capability one at a time, and delivers an ordered
//! batch of annotated outcomes:
//!
//! - **One outcome per contract**: a failing contract contributes an outcome
//!   carrying its error instead of aborting the batch
//! - **Order preservation**: outcomes come back in input order regardless of
//!   how long each individual validation takes
//! - **Errors as data**: validation failures live inside their outcome; the
//!   batch itself always completes
//! - **Event-driven observability**: per-contract and per-batch event
//!   emission for monitoring
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contractflow::prelude::*;
//!
//! let contracts: Vec<Arc<dyn Contract>> = load_contracts()?;
//!
//! let batch = validate_contracts(&contracts).await;
//! for outcome in &batch {
//!     if let Some(err) = &outcome.error {
//!         eprintln!("{}: {}", outcome.contract_name(), err);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod contract;
pub mod errors;
pub mod events;
pub mod outcome;
pub mod testing;
pub mod validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::contract::{Contract, FnContract, ValidationReport};
    pub use crate::errors::ValidationError;
    pub use crate::events::{EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::outcome::{BatchSummary, ResultBatch, ValidationOutcome};
    pub use crate::validator::{validate_contracts, BatchValidator};
}
