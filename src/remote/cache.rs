//! Time-boxed snapshot cache.
//!
//! A single slot holding the raw workbook bytes of the last fetch plus a
//! JSON sidecar with the fetch instant. A read inside the TTL window returns
//! the stored bytes without touching the network; `reload` deletes the slot.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DATA_FILE: &str = "logbook.xlsx";
const META_FILE: &str = "logbook.meta.json";

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotMeta {
    /// Unix seconds of the fetch that produced the data file.
    fetched_at: i64,
}

pub struct SnapshotCache {
    dir: PathBuf,
    ttl_secs: u64,
}

impl SnapshotCache {
    pub fn new(dir: PathBuf, ttl_secs: u64) -> Self {
        Self { dir, ttl_secs }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    fn meta_file(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Stored bytes, when the snapshot is still inside the TTL window.
    pub fn load_fresh(&self) -> Option<Vec<u8>> {
        let meta_raw = fs::read_to_string(self.meta_file()).ok()?;
        let meta: SnapshotMeta = serde_json::from_str(&meta_raw).ok()?;

        let age = chrono::Utc::now().timestamp() - meta.fetched_at;
        if age < 0 || age >= self.ttl_secs as i64 {
            return None;
        }

        fs::read(self.data_file()).ok()
    }

    /// Overwrite the slot with freshly fetched bytes, stamped now.
    pub fn store(&self, bytes: &[u8]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.data_file(), bytes)?;

        let meta = SnapshotMeta {
            fetched_at: chrono::Utc::now().timestamp(),
        };
        let raw = serde_json::to_string(&meta).map_err(|e| AppError::Other(e.to_string()))?;
        fs::write(self.meta_file(), raw)?;

        Ok(())
    }

    /// Drop the slot. Returns whether anything was actually removed.
    pub fn invalidate(&self) -> AppResult<bool> {
        let mut removed = false;
        for file in [self.meta_file(), self.data_file()] {
            if file.exists() {
                fs::remove_file(&file)?;
                removed = true;
            }
        }
        Ok(removed)
    }
}
