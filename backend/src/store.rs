use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use shared::models::Poll;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-document store: the full poll collection lives in one JSON array
/// on disk, and every mutation rewrites the file.
///
/// Callers must hold the guard from [`PollStore::lock`] across their whole
/// load -> mutate -> save sequence; the mutex is the only thing that keeps
/// two concurrent votes from overwriting each other's counts.
#[derive(Debug)]
pub struct PollStore {
    data_file: PathBuf,
    write_lock: Mutex<()>,
}

impl PollStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_dir.into().join("polls.json"),
            write_lock: Mutex::new(()),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reads the full collection. A missing file is initialized to an empty
    /// array; unreadable or malformed content is logged and treated as
    /// empty rather than failing the request.
    pub fn load_all(&self) -> Vec<Poll> {
        if !self.data_file.exists() {
            if let Err(e) = self.save_all(&[]) {
                error!("Failed to initialize {}: {}", self.data_file.display(), e);
            }
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to read {}: {}", self.data_file.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(polls) => polls,
            Err(e) => {
                error!("Malformed poll data in {}: {}", self.data_file.display(), e);
                Vec::new()
            }
        }
    }

    /// Serializes the entire collection and overwrites the file.
    pub fn save_all(&self, polls: &[Poll]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(polls)?;
        fs::write(&self.data_file, raw)?;
        Ok(())
    }
}
