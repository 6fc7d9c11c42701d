//! HTTP client for the Homebrew formula API

use std::time::Duration;

use async_trait::async_trait;
use brewtrack_core::{Formula, Snapshot};
use tracing::{debug, info, warn};

use crate::raw::RawFormula;
use crate::source::CatalogSource;
use crate::{FetchError, Result};

/// Client for the formula catalog endpoints.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch details for a single formula.
    ///
    /// `None` when the catalog has no entry of that name.
    pub async fn fetch_formula(&self, name: &str) -> Result<Option<Formula>> {
        let url = format!("{}/{}.json", self.base_url, name);
        debug!(url = %url, "fetching formula details");

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                code: response.status().as_u16(),
                url,
            });
        }

        let raw: RawFormula = response.json().await?;
        let formula = raw.into_formula().ok_or_else(|| {
            FetchError::InvalidPayload(format!("formula object from {} has no name", url))
        })?;
        Ok(Some(formula))
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_all(&self) -> Result<Snapshot> {
        let url = format!("{}.json", self.base_url);
        info!(url = %url, "fetching formula list");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                code: response.status().as_u16(),
                url,
            });
        }

        let raw: Vec<RawFormula> = response.json().await?;
        let snapshot = build_snapshot(raw);
        info!(count = snapshot.len(), "fetched formula list");
        Ok(snapshot)
    }
}

/// Map raw records into a snapshot.
///
/// Records without a usable name are dropped with a warning instead of
/// failing the fetch; one malformed record must not block visibility into
/// everything else.
pub fn build_snapshot(raw: Vec<RawFormula>) -> Snapshot {
    let mut snapshot = Snapshot::new();
    let mut dropped = 0usize;

    for record in raw {
        match record.into_formula() {
            Some(formula) => {
                snapshot.insert(formula);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, "skipped formulas without a usable name");
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_snapshot_drops_nameless_and_dedupes() {
        let raw: Vec<RawFormula> = serde_json::from_str(
            r#"[
                {"name": "fd", "versions": {"stable": "8.7.0"}},
                {"desc": "no name here"},
                {"name": "fd", "versions": {"stable": "8.7.1"}},
                {"name": "bat"}
            ]"#,
        )
        .unwrap();

        let snapshot = build_snapshot(raw);

        assert_eq!(snapshot.len(), 2);
        // Last occurrence wins for duplicate names.
        assert_eq!(snapshot.get("fd").unwrap().version.as_deref(), Some("8.7.1"));
        assert!(snapshot.contains("bat"));
    }
}
