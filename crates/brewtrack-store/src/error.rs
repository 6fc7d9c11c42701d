//! Error types for brewtrack-store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by the snapshot store.
///
/// Read-side absence and corruption are not errors (they resolve to an
/// absent baseline); these variants cover permission problems and every
/// write-side failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
