//! Forbidden pairs carried over from a previous draw

use std::collections::{HashMap, HashSet};

/// A directed giver → recipient combination that may not be drawn this run
///
/// Forbidding `(Alice, Bob)` says nothing about `(Bob, Alice)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForbiddenPair {
    /// Name of the giver
    pub giver: String,

    /// Name of the recipient
    pub recipient: String,
}

impl ForbiddenPair {
    /// Create a new forbidden pair
    pub fn new(giver: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            recipient: recipient.into(),
        }
    }
}

/// Read-only set of forbidden pairs with constant-time lookup by names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForbiddenPairs {
    by_giver: HashMap<String, HashSet<String>>,
    len: usize,
}

impl ForbiddenPairs {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair; returns false if it was already present
    pub fn insert(&mut self, pair: ForbiddenPair) -> bool {
        let inserted = self
            .by_giver
            .entry(pair.giver)
            .or_default()
            .insert(pair.recipient);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Whether `giver` is forbidden from drawing `recipient`
    ///
    /// # Examples
    ///
    /// ```
    /// use yule_domain::{ForbiddenPair, ForbiddenPairs};
    ///
    /// let forbidden: ForbiddenPairs = [ForbiddenPair::new("Alice", "Bob")].into_iter().collect();
    /// assert!(forbidden.contains("Alice", "Bob"));
    /// assert!(!forbidden.contains("Bob", "Alice"));
    /// ```
    pub fn contains(&self, giver: &str, recipient: &str) -> bool {
        self.by_giver
            .get(giver)
            .is_some_and(|recipients| recipients.contains(recipient))
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<ForbiddenPair> for ForbiddenPairs {
    fn from_iter<I: IntoIterator<Item = ForbiddenPair>>(iter: I) -> Self {
        let mut pairs = Self::new();
        for pair in iter {
            pairs.insert(pair);
        }
        pairs
    }
}
