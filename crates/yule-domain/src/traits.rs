//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and persistence.
//! Implementations live in `yule-store`.

use crate::{Assignment, Participant, PairingRecord};

/// Trait for loading and saving the participant roster
pub trait ParticipantRepository {
    /// Error type for repository operations
    type Error;

    /// Load the roster in stored order; a missing roster is empty
    fn load_participants(&self) -> Result<Vec<Participant>, Self::Error>;

    /// Replace the stored roster
    fn save_participants(&self, participants: &[Participant]) -> Result<(), Self::Error>;
}

/// Trait for reading previous draws and recording new ones
pub trait HistoryRepository {
    /// Error type for repository operations
    type Error;

    /// Load previous pairings
    ///
    /// `roster` resolves bare names when older history files only stored
    /// names rather than full participant records.
    fn load_records(&self, roster: &[Participant]) -> Result<Vec<PairingRecord>, Self::Error>;

    /// Persist a finished assignment
    fn save_assignment(&self, assignment: &Assignment) -> Result<(), Self::Error>;
}
