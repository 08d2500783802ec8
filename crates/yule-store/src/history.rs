//! JSON-backed draw history, with transparent upgrade of the legacy shape

use crate::records::{HistoryDocument, LegacyRecord, StoredPairing};
use crate::{read_optional, write_json, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use yule_domain::traits::HistoryRepository;
use yule_domain::{Assignment, ForbiddenPairs, PairingRecord, Participant};

/// Outcome of reading a history file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedHistory {
    /// Pairings from the previous draw
    pub records: Vec<PairingRecord>,

    /// Whether the file was in the legacy shape and has been rewritten
    pub upgraded: bool,

    /// Legacy entries whose names were not found in the roster
    pub skipped: Vec<LegacyRecord>,
}

impl LoadedHistory {
    /// Directed name pairs that may not be drawn again
    pub fn forbidden_pairs(&self) -> ForbiddenPairs {
        self.records.iter().map(PairingRecord::forbidden_pair).collect()
    }
}

/// Draw history stored as a JSON list of pairings
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
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

    /// Load previous pairings
    ///
    /// A missing file yields an empty history. A legacy (names only) file is
    /// resolved against `roster` by exact name, rewritten in the current
    /// shape, and reported with `upgraded = true`. Entries naming someone not
    /// in the roster are dropped and listed in `skipped`.
    ///
    /// # Errors
    /// Fails if the file cannot be read or written, is in neither shape, or
    /// contains an entry with an empty name.
    pub fn load(&self, roster: &[Participant]) -> Result<LoadedHistory, StoreError> {
        let Some(text) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "No history file, nothing is forbidden");
            return Ok(LoadedHistory::default());
        };

        let document: HistoryDocument =
            serde_json::from_str(&text).map_err(|e| StoreError::json(&self.path, e))?;

        match document {
            HistoryDocument::Current(stored) => {
                let records: Vec<PairingRecord> = stored.into_iter().map(Into::into).collect();
                self.check_names(records.iter().map(|r| (&r.giver.name, &r.recipient.name)))?;
                debug!(path = %self.path.display(), count = records.len(), "Loaded history");
                Ok(LoadedHistory {
                    records,
                    upgraded: false,
                    skipped: Vec::new(),
                })
            }
            HistoryDocument::Legacy(legacy) => self.upgrade(legacy, roster),
        }
    }

    /// Persist a finished assignment as full participant snapshots
    pub fn save(&self, assignment: &Assignment) -> Result<(), StoreError> {
        self.save_records(&assignment.to_records())
    }

    /// Persist raw pairing records
    pub fn save_records(&self, records: &[PairingRecord]) -> Result<(), StoreError> {
        let stored: Vec<StoredPairing> = records.iter().map(Into::into).collect();
        write_json(&self.path, &stored)?;
        debug!(path = %self.path.display(), count = stored.len(), "Saved pairings");
        Ok(())
    }

    fn upgrade(
        &self,
        legacy: Vec<LegacyRecord>,
        roster: &[Participant],
    ) -> Result<LoadedHistory, StoreError> {
        self.check_names(legacy.iter().map(|r| (&r.giver, &r.recipient)))?;

        let by_name: HashMap<&str, &Participant> =
            roster.iter().map(|p| (p.name.as_str(), p)).collect();

        let mut records = Vec::with_capacity(legacy.len());
        let mut skipped = Vec::new();
        for entry in legacy {
            match (by_name.get(entry.giver.as_str()), by_name.get(entry.recipient.as_str())) {
                (Some(giver), Some(recipient)) => {
                    records.push(PairingRecord::new((*giver).clone(), (*recipient).clone()));
                }
                _ => {
                    warn!(
                        giver = %entry.giver,
                        recipient = %entry.recipient,
                        "Skipping legacy pairing: participant not found in roster"
                    );
                    skipped.push(entry);
                }
            }
        }

        self.save_records(&records)?;
        info!(
            path = %self.path.display(),
            upgraded = records.len(),
            skipped = skipped.len(),
            "Upgraded legacy history file to the current format"
        );

        Ok(LoadedHistory {
            records,
            upgraded: true,
            skipped,
        })
    }

    fn check_names<'a, I>(&self, pairs: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (index, (giver, recipient)) in pairs.into_iter().enumerate() {
            if giver.trim().is_empty() || recipient.trim().is_empty() {
                return Err(StoreError::InvalidData {
                    path: self.path.clone(),
                    reason: format!("entry {} has an empty giver or recipient name", index),
                });
            }
        }
        Ok(())
    }
}

impl HistoryRepository for JsonHistoryStore {
    type Error = StoreError;

    fn load_records(&self, roster: &[Participant]) -> Result<Vec<PairingRecord>, Self::Error> {
        self.load(roster).map(|history| history.records)
    }

    fn save_assignment(&self, assignment: &Assignment) -> Result<(), Self::Error> {
        self.save(assignment)
    }
}
