//! File-backed character record store
//!
//! Keeps one character's `PedData` record as a JSON file. Saving a snapshot
//! rewrites the whole record atomically; every other field in the record is
//! carried through untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use overlay_core::errors::Result as CoreResult;
use overlay_core::persistence::{PedData, SnapshotSink};
use overlay_core::snapshot::OverlaySnapshot;

use crate::atomic::atomic_write;
use crate::errors::{into_persistence, io_error, record_error, Result};

#[derive(Debug, Clone)]
pub struct FsCharacterStore {
    path: PathBuf,
    record: PedData,
}

impl FsCharacterStore {
    /// Open the record at `path`
    ///
    /// A missing file is an empty record: nothing has been saved yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let record = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).map_err(|e| record_error("read_record", e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no character record yet");
                PedData::default()
            }
            Err(e) => return Err(io_error("read_record", e)),
        };
        Ok(Self { path, record })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &PedData {
        &self.record
    }

    /// Saved overlay snapshot, if the record has one
    pub fn snapshot(&self) -> Option<&OverlaySnapshot> {
        self.record.overlays.as_ref()
    }

    fn write(&self) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(&self.record).map_err(|e| record_error("write_record", e))?;
        atomic_write(&self.path, &json)
    }
}

impl SnapshotSink for FsCharacterStore {
    fn save(&mut self, snapshot: &OverlaySnapshot) -> CoreResult<()> {
        self.record.overlays = Some(snapshot.clone());
        self.write().map_err(into_persistence)?;
        tracing::debug!(
            path = %self.path.display(),
            overlays = snapshot.len(),
            "character record written"
        );
        Ok(())
    }
}
