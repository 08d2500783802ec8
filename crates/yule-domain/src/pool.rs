//! Pool module - the adult and kid partitions

use crate::Participant;
use std::fmt;

/// Which pool a draw is running over
///
/// Pools are solved independently: a kid never gives to or receives from an
/// adult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// Participants with `is_kid == false`
    Adults,

    /// Participants with `is_kid == true`
    Kids,
}

impl PoolKind {
    /// Get the pool name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolKind::Adults => "adults",
            PoolKind::Kids => "kids",
        }
    }

    /// Whether the family direction rule applies to this pool
    pub fn enforces_direction(&self) -> bool {
        matches!(self, PoolKind::Adults)
    }

    /// Pool a participant belongs to
    pub fn of(participant: &Participant) -> Self {
        if participant.is_kid {
            PoolKind::Kids
        } else {
            PoolKind::Adults
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two disjoint pools of a roster, in original relative order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    /// Adult participants
    pub adults: Vec<Participant>,

    /// Kid participants
    pub kids: Vec<Participant>,
}

impl Pools {
    /// Split a roster into adults and kids
    ///
    /// # Examples
    ///
    /// ```
    /// use yule_domain::{Participant, Pools};
    ///
    /// let roster = vec![
    ///     Participant::adult("Alice", "F1"),
    ///     Participant::kid("Ann", "F1"),
    ///     Participant::adult("Bob", "F2"),
    /// ];
    /// let pools = Pools::partition(&roster);
    /// assert_eq!(pools.adults.len(), 2);
    /// assert_eq!(pools.kids.len(), 1);
    /// ```
    pub fn partition(participants: &[Participant]) -> Self {
        let (kids, adults): (Vec<Participant>, Vec<Participant>) =
            participants.iter().cloned().partition(|p| p.is_kid);
        Self { adults, kids }
    }

    /// Participants in the given pool
    pub fn get(&self, kind: PoolKind) -> &[Participant] {
        match kind {
            PoolKind::Adults => &self.adults,
            PoolKind::Kids => &self.kids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_preserves_order() {
        let roster = vec![
            Participant::kid("Ann", "F1"),
            Participant::adult("Bob", "F2"),
            Participant::kid("Cal", "F3"),
            Participant::adult("Dee", "F1"),
        ];

        let pools = Pools::partition(&roster);

        let adults: Vec<&str> = pools.adults.iter().map(|p| p.name.as_str()).collect();
        let kids: Vec<&str> = pools.kids.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(adults, vec!["Bob", "Dee"]);
        assert_eq!(kids, vec!["Ann", "Cal"]);
    }

    #[test]
    fn test_partition_empty() {
        let pools = Pools::partition(&[]);
        assert!(pools.get(PoolKind::Adults).is_empty());
        assert!(pools.get(PoolKind::Kids).is_empty());
    }

    #[test]
    fn test_direction_only_for_adults() {
        assert!(PoolKind::Adults.enforces_direction());
        assert!(!PoolKind::Kids.enforces_direction());
        assert_eq!(PoolKind::of(&Participant::kid("Ann", "F1")), PoolKind::Kids);
    }
}
