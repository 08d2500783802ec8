//! Participant module - the people taking part in an exchange

use std::fmt;

/// A participant in the gift exchange
///
/// Identity is by value: two participants are equal only when name, family
/// and age group all match. Participants are immutable once handed to the
/// solver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Display name, unique within a single draw
    pub name: String,

    /// Family identifier; members of the same family never draw each other
    pub family_id: String,

    /// Kids are drawn in their own pool, separate from adults
    pub is_kid: bool,
}

impl Participant {
    /// Create a new participant
    ///
    /// # Examples
    ///
    /// ```
    /// use yule_domain::Participant;
    ///
    /// let alice = Participant::new("Alice", "F1", false);
    /// assert_eq!(alice.family_id, "F1");
    /// assert!(!alice.is_kid);
    /// ```
    pub fn new(name: impl Into<String>, family_id: impl Into<String>, is_kid: bool) -> Self {
        Self {
            name: name.into(),
            family_id: family_id.into(),
            is_kid,
        }
    }

    /// Create an adult participant
    pub fn adult(name: impl Into<String>, family_id: impl Into<String>) -> Self {
        Self::new(name, family_id, false)
    }

    /// Create a kid participant
    pub fn kid(name: impl Into<String>, family_id: impl Into<String>) -> Self {
        Self::new(name, family_id, true)
    }

    /// Whether this participant belongs to the same family as `other`
    pub fn is_family_of(&self, other: &Participant) -> bool {
        self.family_id == other.family_id
    }

    /// Human readable age group label
    pub fn age_group(&self) -> &'static str {
        if self.is_kid {
            "Kid"
        } else {
            "Adult"
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, Family: {})",
            self.name,
            self.age_group(),
            self.family_id
        )
    }
}
