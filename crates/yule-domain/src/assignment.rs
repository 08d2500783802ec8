//! Assignment module - the outcome of a draw

use crate::{Participant, PairingRecord};

/// One committed giver → recipient edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pairing {
    /// Participant buying the gift
    pub giver: Participant,

    /// Participant receiving the gift
    pub recipient: Participant,
}

/// An ordered giver → recipient mapping
///
/// Entries keep the order in which givers were committed, so repeated draws
/// over the same input print and persist identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairings: Vec<Pairing>,
}

impl Assignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pairing
    ///
    /// The caller guarantees that `giver` has no pairing yet.
    pub fn push(&mut self, giver: Participant, recipient: Participant) {
        self.pairings.push(Pairing { giver, recipient });
    }

    /// Append every pairing of `other`
    ///
    /// Used to merge per-pool results, whose giver sets are disjoint.
    pub fn merge(&mut self, other: Assignment) {
        self.pairings.extend(other.pairings);
    }

    /// Recipient drawn by `giver`, if any
    pub fn recipient_of(&self, giver: &Participant) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|pairing| &pairing.giver == giver)
            .map(|pairing| &pairing.recipient)
    }

    /// Giver that drew `recipient`, if any
    pub fn giver_of(&self, recipient: &Participant) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|pairing| &pairing.recipient == recipient)
            .map(|pairing| &pairing.giver)
    }

    /// Number of pairings
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether no pairings were made
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Iterate pairings in commit order
    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    /// Snapshot every pairing for persistence
    pub fn to_records(&self) -> Vec<PairingRecord> {
        self.pairings
            .iter()
            .map(|pairing| PairingRecord::new(pairing.giver.clone(), pairing.recipient.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Participant, Participant)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Participant, Participant)>>(iter: I) -> Self {
        Self {
            pairings: iter
                .into_iter()
                .map(|(giver, recipient)| Pairing { giver, recipient })
                .collect(),
        }
    }
}
