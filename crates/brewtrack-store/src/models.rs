//! Persisted file models

use brewtrack_core::{Formula, Snapshot};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// On-disk shape of `formulas.json`.
///
/// The record list sits inside a wrapper object rather than a bare array so
/// future top-level fields can be added without breaking readers that only
/// look at `formulas`. Records are written in ascending name order.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub formulas: Vec<Formula>,
}

impl SnapshotFile {
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::from_records(self.formulas)
    }
}

impl From<&Snapshot> for SnapshotFile {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            formulas: snapshot.records().cloned().collect(),
        }
    }
}

/// On-disk shape of `metadata.json`.
///
/// Describes the persisted snapshot without requiring a full parse of the
/// record list. `formula_count` always equals the written snapshot's size;
/// `content_hash` is the digest of the serialized snapshot bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub formula_count: usize,
    pub content_hash: String,
}
