//! Per-agent last-seen cursor tracking
//!
//! The whole cursor map lives in one JSON document
//! (`<root>/last_seen.json`) and is rewritten in full on every update.
//! The advisory lock serializes the read-modify-write window so two
//! concurrent updates for different agents cannot discard each other's
//! entries.

use crate::error::BusError;
use crate::io::{acquire_lock, atomic_write};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const LOCK_RETRIES: u32 = 5;

/// Cursor document store (`<root>/last_seen.json`)
#[derive(Debug, Clone)]
pub struct CursorStore {
    doc_path: PathBuf,
    lock_path: PathBuf,
}

impl CursorStore {
    pub fn new(doc_path: PathBuf) -> Self {
        let lock_path = doc_path.with_extension("lock");
        Self {
            doc_path,
            lock_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.doc_path
    }

    /// Read the full cursor map.
    ///
    /// A missing document is an empty map. A malformed one is a hard
    /// error: a silent reset would mark every message unread for every
    /// agent.
    pub fn load(&self) -> Result<BTreeMap<String, String>, BusError> {
        let content = match fs::read(&self.doc_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(BusError::Io {
                    path: self.doc_path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_slice(&content).map_err(|e| BusError::CorruptState {
            path: self.doc_path.clone(),
            source: e,
        })
    }

    /// Last-seen timestamp for one agent, if any.
    pub fn get(&self, agent: &str) -> Result<Option<String>, BusError> {
        Ok(self.load()?.get(agent).cloned())
    }

    /// Set/overwrite the entry for `agent` and rewrite the document.
    ///
    /// Holds the cursor lock across the whole load-modify-write window.
    pub fn set(&self, agent: &str, timestamp: &str) -> Result<(), BusError> {
        let _lock = acquire_lock(&self.lock_path, LOCK_RETRIES)?;

        let mut cursors = self.load()?;
        cursors.insert(agent.to_string(), timestamp.to_string());

        let body = serde_json::to_vec_pretty(&cursors).map_err(|e| BusError::Json {
            path: self.doc_path.clone(),
            source: e,
        })?;
        atomic_write(&self.doc_path, &body)
    }
}
