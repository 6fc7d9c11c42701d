//! Snapshot persistence with atomic replacement

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use brewtrack_core::{Baseline, Snapshot};
use tempfile::NamedTempFile;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::models::{SnapshotFile, SnapshotMetadata};
use crate::{Result, StoreError};

const SNAPSHOT_FILE: &str = "formulas.json";
const METADATA_FILE: &str = "metadata.json";

/// Durable store for the latest known snapshot and its metadata.
///
/// The data directory is explicit configuration, passed in at construction
/// so tests can point the store at a temporary path.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Default data directory: `~/.brewtrack`.
    pub fn default_dir() -> PathBuf {
        if let Some(dirs) = directories::BaseDirs::new() {
            dirs.home_dir().join(".brewtrack")
        } else {
            PathBuf::from(".brewtrack")
        }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }

    /// Read the persisted baseline.
    ///
    /// A missing snapshot file is the normal first-run state and an
    /// unparseable one is treated the same way after a warning, so the tool
    /// stays usable after hand-editing or partial corruption. Permission
    /// errors are not absence and are surfaced.
    pub fn load_previous(&self) -> Result<Baseline> {
        let path = self.snapshot_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Baseline::Absent),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_slice::<SnapshotFile>(&bytes) {
            Ok(file) => Ok(Baseline::Present(file.into_snapshot())),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "stored snapshot is unreadable, treating as no baseline"
                );
                Ok(Baseline::Absent)
            }
        }
    }

    /// Read the metadata written by the last successful persist.
    pub fn load_metadata(&self) -> Result<Option<SnapshotMetadata>> {
        let path = self.metadata_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "stored metadata is unreadable, ignoring"
                );
                Ok(None)
            }
        }
    }

    /// Digest of the snapshot exactly as `persist` would serialize it.
    ///
    /// Identical name-to-record mappings produce identical digests, whatever
    /// order they were built in, so the stored `content_hash` can gate
    /// comparisons without deserializing both sides.
    pub fn fingerprint(snapshot: &Snapshot) -> Result<String> {
        let bytes = Self::serialize(snapshot)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }

    /// Write the snapshot and its metadata, replacing the previous pair.
    ///
    /// Both files go through write-temp-then-rename inside the data
    /// directory, snapshot first, so a crash mid-write leaves the previous
    /// pair intact and no reader ever observes metadata referencing an
    /// unwritten snapshot.
    pub fn persist(&self, snapshot: &Snapshot) -> Result<SnapshotMetadata> {
        let bytes = Self::serialize(snapshot)?;
        let metadata = SnapshotMetadata {
            updated_at: OffsetDateTime::now_utc(),
            formula_count: snapshot.len(),
            content_hash: blake3::hash(&bytes).to_hex().to_string(),
        };

        self.replace(&self.snapshot_path(), &bytes)?;
        self.replace(&self.metadata_path(), &serde_json::to_vec_pretty(&metadata)?)?;

        debug!(
            count = metadata.formula_count,
            hash = %metadata.content_hash,
            "persisted snapshot"
        );
        Ok(metadata)
    }

    fn serialize(snapshot: &Snapshot) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&SnapshotFile::from(snapshot))?)
    }

    fn replace(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}
