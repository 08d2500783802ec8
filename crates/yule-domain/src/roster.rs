//! Roster validation, run at the boundary before a draw

use crate::Participant;
use std::collections::HashSet;
use std::fmt;

/// Reasons a roster cannot be handed to the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A participant has an empty (or whitespace-only) name
    EmptyName,

    /// A participant has no family identifier
    EmptyFamily {
        /// Name of the offending participant
        name: String,
    },

    /// Two participants share a name; names key forbidden pairs
    DuplicateName {
        /// The repeated name
        name: String,
    },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "participant name cannot be empty"),
            RosterError::EmptyFamily { name } => {
                write!(f, "participant '{}' has no family ID", name)
            }
            RosterError::DuplicateName { name } => {
                write!(f, "participant name '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Check that a roster is well formed
///
/// # Errors
/// Returns the first problem found, scanning in roster order
pub fn validate_roster(participants: &[Participant]) -> Result<(), RosterError> {
    let mut seen = HashSet::new();

    for participant in participants {
        if participant.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if participant.family_id.trim().is_empty() {
            return Err(RosterError::EmptyFamily {
                name: participant.name.clone(),
            });
        }
        if !seen.insert(participant.name.as_str()) {
            return Err(RosterError::DuplicateName {
                name: participant.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roster() {
        let roster = vec![
            Participant::adult("Alice", "F1"),
            Participant::kid("Ann", "F1"),
        ];
        assert!(validate_roster(&roster).is_ok());
        assert!(validate_roster(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let roster = vec![
            Participant::adult("Alice", "F1"),
            Participant::kid("Alice", "F2"),
        ];
        assert_eq!(
            validate_roster(&roster),
            Err(RosterError::DuplicateName {
                name: "Alice".to_string()
            })
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            validate_roster(&[Participant::adult("  ", "F1")]),
            Err(RosterError::EmptyName)
        );
        assert!(matches!(
            validate_roster(&[Participant::adult("Alice", "")]),
            Err(RosterError::EmptyFamily { .. })
        ));
    }
}
