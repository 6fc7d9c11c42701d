//! Tracker operations over the persisted baseline
//!
//! Composes the snapshot store and the diff engine into the three
//! operations the CLI drives: update, diff, new. Fetching is the caller's
//! job; every operation takes the freshly fetched snapshot as input.

use brewtrack_core::{Baseline, DiffResult, Formula, Snapshot, diff};
use brewtrack_store::{SnapshotMetadata, SnapshotStore, StoreError};
use thiserror::Error;
use tracing::{info, warn};

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Error, Debug)]
pub enum TrackError {
    /// The fetched catalog is empty while the baseline holds records. A
    /// zero-record fetch is far more likely a transport failure than a real
    /// mass removal, so nothing is compared or persisted.
    #[error(
        "fetched catalog is empty but the stored baseline has {previous_count} formulas; \
         refusing to continue"
    )]
    EmptyCatalog { previous_count: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of [`Tracker::run_update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// First successful update; there was nothing to compare against.
    BaselineEstablished(SnapshotMetadata),
    /// Stored content already matches the fetched catalog; nothing written.
    Unchanged(SnapshotMetadata),
    /// Baseline replaced with the fetched catalog.
    Updated(SnapshotMetadata),
}

/// Result of [`Tracker::run_diff`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiffOutcome {
    /// No baseline exists yet; a diff is not meaningful. Distinct from an
    /// everything-added diff on purpose.
    NoBaseline,
    /// Fingerprints match; the full comparison was skipped.
    Unchanged,
    Changes(DiffResult),
}

/// Result of [`Tracker::run_new`].
#[derive(Debug, Clone, PartialEq)]
pub enum NewOutcome {
    NoBaseline,
    /// Newly added formulas in name order, truncated to the caller's limit.
    /// `total` is the count before truncation.
    Added { formulas: Vec<Formula>, total: usize },
}

pub struct Tracker {
    store: SnapshotStore,
}

impl Tracker {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Persist `current` as the new baseline.
    ///
    /// Skips the write when the stored content hash already matches the
    /// fetched snapshot's fingerprint.
    pub fn run_update(&self, current: &Snapshot) -> Result<UpdateOutcome> {
        let previous = self.store.load_previous()?;
        check_empty_catalog(&previous, current)?;

        if previous.is_absent() {
            if current.is_empty() {
                warn!("establishing a baseline from an empty catalog");
            }
            let metadata = self.store.persist(current)?;
            info!(count = metadata.formula_count, "baseline established");
            return Ok(UpdateOutcome::BaselineEstablished(metadata));
        }

        if let Some(metadata) = self.store.load_metadata()? {
            if SnapshotStore::fingerprint(current)? == metadata.content_hash {
                return Ok(UpdateOutcome::Unchanged(metadata));
            }
        }

        let metadata = self.store.persist(current)?;
        info!(count = metadata.formula_count, "baseline updated");
        Ok(UpdateOutcome::Updated(metadata))
    }

    /// Compare `current` against the baseline. Never persists.
    pub fn run_diff(&self, current: &Snapshot) -> Result<DiffOutcome> {
        let previous = self.store.load_previous()?;
        check_empty_catalog(&previous, current)?;

        let Baseline::Present(previous) = previous else {
            return Ok(DiffOutcome::NoBaseline);
        };

        if let Some(metadata) = self.store.load_metadata()? {
            if SnapshotStore::fingerprint(current)? == metadata.content_hash {
                return Ok(DiffOutcome::Unchanged);
            }
        }

        Ok(DiffOutcome::Changes(diff(&previous, current)))
    }

    /// The `added` category only, optionally truncated.
    ///
    /// Truncation takes the first `limit` entries of the name-ordered list,
    /// so the result is always a prefix of the untruncated one.
    pub fn run_new(&self, current: &Snapshot, limit: Option<usize>) -> Result<NewOutcome> {
        match self.run_diff(current)? {
            DiffOutcome::NoBaseline => Ok(NewOutcome::NoBaseline),
            DiffOutcome::Unchanged => Ok(NewOutcome::Added {
                formulas: Vec::new(),
                total: 0,
            }),
            DiffOutcome::Changes(diff) => {
                let total = diff.added.len();
                let mut formulas = diff.added;
                if let Some(limit) = limit {
                    formulas.truncate(limit);
                }
                Ok(NewOutcome::Added { formulas, total })
            }
        }
    }
}

fn check_empty_catalog(previous: &Baseline, current: &Snapshot) -> Result<()> {
    if let Baseline::Present(previous) = previous {
        if current.is_empty() && !previous.is_empty() {
            return Err(TrackError::EmptyCatalog {
                previous_count: previous.len(),
            });
        }
    }
    Ok(())
}
