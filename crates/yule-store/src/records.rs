//! Serde shapes of the on-disk records

use serde::{Deserialize, Serialize};
use yule_domain::{PairingRecord, Participant};

/// On-disk participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    /// Participant name
    pub name: String,
    /// Family identifier
    pub family_id: String,
    /// Whether the participant draws in the kid pool
    pub is_kid: bool,
}

impl From<&Participant> for ParticipantRecord {
    fn from(p: &Participant) -> Self {
        Self {
            name: p.name.clone(),
            family_id: p.family_id.clone(),
            is_kid: p.is_kid,
        }
    }
}

impl From<ParticipantRecord> for Participant {
    fn from(r: ParticipantRecord) -> Self {
        Participant::new(r.name, r.family_id, r.is_kid)
    }
}

/// On-disk pairing with full participant snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPairing {
    /// Giver snapshot
    pub giver: ParticipantRecord,
    /// Recipient snapshot
    pub recipient: ParticipantRecord,
}

impl From<&PairingRecord> for StoredPairing {
    fn from(record: &PairingRecord) -> Self {
        Self {
            giver: (&record.giver).into(),
            recipient: (&record.recipient).into(),
        }
    }
}

impl From<StoredPairing> for PairingRecord {
    fn from(stored: StoredPairing) -> Self {
        PairingRecord::new(stored.giver.into(), stored.recipient.into())
    }
}

/// Older history entry that only stored names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRecord {
    /// Giver name
    pub giver: String,
    /// Recipient name
    pub recipient: String,
}

/// Either history shape, sniffed from the whole document
///
/// An empty array parses as `Current`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum HistoryDocument {
    Current(Vec<StoredPairing>),
    Legacy(Vec<LegacyRecord>),
}
