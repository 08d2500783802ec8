//! JSON-backed participant roster

use crate::records::ParticipantRecord;
use crate::{read_optional, write_json, StoreError};
use std::path::{Path, PathBuf};
use tracing::debug;
use yule_domain::traits::ParticipantRepository;
use yule_domain::Participant;

/// Participant roster stored as an ordered JSON list
#[derive(Debug, Clone)]
pub struct JsonParticipantStore {
    path: PathBuf,
}

impl JsonParticipantStore {
    /// Create a store over the given file; the file need not exist yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster in stored order; a missing file is an empty roster
    pub fn load(&self) -> Result<Vec<Participant>, StoreError> {
        let Some(text) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "No roster file, starting empty");
            return Ok(Vec::new());
        };

        let records: Vec<ParticipantRecord> =
            serde_json::from_str(&text).map_err(|e| StoreError::json(&self.path, e))?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded roster");

        Ok(records.into_iter().map(Participant::from).collect())
    }

    /// Replace the stored roster
    pub fn save(&self, participants: &[Participant]) -> Result<(), StoreError> {
        let records: Vec<ParticipantRecord> = participants.iter().map(Into::into).collect();
        write_json(&self.path, &records)?;
        debug!(path = %self.path.display(), count = records.len(), "Saved roster");
        Ok(())
    }
}

impl ParticipantRepository for JsonParticipantStore {
    type Error = StoreError;

    fn load_participants(&self) -> Result<Vec<Participant>, Self::Error> {
        self.load()
    }

    fn save_participants(&self, participants: &[Participant]) -> Result<(), Self::Error> {
        self.save(participants)
    }
}
