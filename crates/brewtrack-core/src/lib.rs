//! Core domain models and logic for brewtrack
//!
//! This crate contains:
//! - Domain models (Formula, Snapshot, Baseline)
//! - Diff engine (pure three-way comparison)
//!
//! No I/O happens here; persistence and fetching live in their own crates.

pub mod diff;
pub mod formula;
pub mod snapshot;

pub use diff::{DiffResult, FormulaUpdate, diff};
pub use formula::Formula;
pub use snapshot::{Baseline, Snapshot};
