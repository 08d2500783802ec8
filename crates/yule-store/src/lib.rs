//! Yule Storage Layer
//!
//! JSON file persistence for the participant roster and draw history,
//! implementing the repository traits from `yule-domain`.
//!
//! # Formats
//!
//! - Roster: `[{"name": "Alice", "familyId": "F1", "isKid": false}, ...]`
//! - History: `[{"giver": <participant>, "recipient": <participant>}, ...]`
//! - Legacy history: `[{"giver": "Alice", "recipient": "Bob"}, ...]`, upgraded
//!   in place the first time it is read
//!
//! # Examples
//!
//! ```no_run
//! use yule_store::{JsonHistoryStore, JsonParticipantStore};
//!
//! let people = JsonParticipantStore::new("data/people.json").load().unwrap();
//! let history = JsonHistoryStore::new("data/assignments_2024.json").load(&people).unwrap();
//! let forbidden = history.forbidden_pairs();
//! ```

#![warn(missing_docs)]

mod history;
mod participants;
mod records;

pub use history::{JsonHistoryStore, LoadedHistory};
pub use participants::JsonParticipantStore;
pub use records::{LegacyRecord, ParticipantRecord, StoredPairing};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON of the expected shape
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsed but the data is unusable
    #[error("Invalid data in {path}: {reason}")]
    InvalidData {
        /// File being parsed
        path: PathBuf,
        /// What was wrong
        reason: String,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a file, treating a missing file as `None`
fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Write pretty JSON, creating parent directories as needed
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }

    let contents = serde_json::to_string_pretty(value).map_err(|e| StoreError::json(path, e))?;
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))
}
