//! Catalog source seam

use async_trait::async_trait;
use brewtrack_core::Snapshot;

use crate::Result;

/// Supplier of the current catalog snapshot.
///
/// Commands depend on this trait so tests can substitute a canned snapshot
/// for the live API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the complete formula listing as a snapshot.
    async fn fetch_all(&self) -> Result<Snapshot>;
}
