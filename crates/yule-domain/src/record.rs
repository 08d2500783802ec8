//! Persisted form of one assignment entry

use crate::{ForbiddenPair, Participant};

/// A giver/recipient snapshot as stored in history files
///
/// Full participant records are kept (not just names) so a later run can
/// re-derive its forbidden pairs without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairingRecord {
    /// Giver at the time of the draw
    pub giver: Participant,

    /// Recipient at the time of the draw
    pub recipient: Participant,
}

impl PairingRecord {
    /// Create a new record
    pub fn new(giver: Participant, recipient: Participant) -> Self {
        Self { giver, recipient }
    }

    /// The directed name pair this record forbids in the next run
    pub fn forbidden_pair(&self) -> ForbiddenPair {
        ForbiddenPair::new(self.giver.name.clone(), self.recipient.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_pair_uses_names() {
        let record = PairingRecord::new(
            Participant::adult("Alice", "F1"),
            Participant::adult("Bob", "F2"),
        );
        assert_eq!(record.forbidden_pair(), ForbiddenPair::new("Alice", "Bob"));
    }
}
