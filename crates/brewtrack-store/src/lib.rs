//! Storage layer for brewtrack
//!
//! This crate provides:
//! - JSON snapshot persistence (formulas.json + metadata.json)
//! - Content fingerprinting for cheap change detection
//! - Atomic replacement of the persisted pair

pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{SnapshotFile, SnapshotMetadata};
pub use store::SnapshotStore;
