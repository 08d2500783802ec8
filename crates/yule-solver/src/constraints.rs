//! Pair-level and assignment-level constraints

use std::collections::HashMap;
use yule_domain::{ForbiddenPairs, Participant};

/// In-progress giver → recipient map used during search
pub type PartialAssignment<'p> = HashMap<&'p Participant, &'p Participant>;

/// Whether `giver` may draw `recipient` given the pairs committed so far
///
/// Rejects self pairs, same-family pairs, forbidden directed pairs, and pairs
/// that would close a 2-cycle with an already committed pair. `current` must
/// be the live partial assignment, not a snapshot.
pub fn is_valid_pair(
    forbidden: &ForbiddenPairs,
    giver: &Participant,
    recipient: &Participant,
    current: &PartialAssignment<'_>,
) -> bool {
    if giver == recipient {
        return false;
    }

    if giver.is_family_of(recipient) {
        return false;
    }

    if forbidden.contains(&giver.name, &recipient.name) {
        return false;
    }

    // recipient already gives back to giver
    if matches!(current.get(recipient), Some(back) if *back == giver) {
        return false;
    }

    true
}

/// Whether every ordered family pair occurs at most once among adult pairs
///
/// Only pairs where neither side is a kid are tallied. `(A, B)` and `(B, A)`
/// may coexist; two edges realising the same `(A, B)` may not.
pub fn satisfies_direction_constraint<'a, I>(pairs: I) -> bool
where
    I: IntoIterator<Item = (&'a Participant, &'a Participant)>,
{
    let mut direction_count: HashMap<(&str, &str), usize> = HashMap::new();

    for (giver, recipient) in pairs {
        if giver.is_kid || recipient.is_kid {
            continue;
        }
        let count = direction_count
            .entry((giver.family_id.as_str(), recipient.family_id.as_str()))
            .or_insert(0);
        *count += 1;
        if *count > 1 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use yule_domain::ForbiddenPair;

    fn people() -> (Participant, Participant, Participant) {
        (
            Participant::adult("Alice", "F1"),
            Participant::adult("Bob", "F2"),
            Participant::adult("Amy", "F1"),
        )
    }

    #[test]
    fn test_rejects_self_pair() {
        let (alice, _, _) = people();
        let current = PartialAssignment::new();
        assert!(!is_valid_pair(&ForbiddenPairs::new(), &alice, &alice, &current));
    }

    #[test]
    fn test_rejects_same_family() {
        let (alice, _, amy) = people();
        let current = PartialAssignment::new();
        assert!(!is_valid_pair(&ForbiddenPairs::new(), &alice, &amy, &current));
    }

    #[test]
    fn test_rejects_forbidden_direction_only() {
        let (alice, bob, _) = people();
        let forbidden: ForbiddenPairs = [ForbiddenPair::new("Alice", "Bob")].into_iter().collect();
        let current = PartialAssignment::new();

        assert!(!is_valid_pair(&forbidden, &alice, &bob, &current));
        assert!(is_valid_pair(&forbidden, &bob, &alice, &current));
    }

    #[test]
    fn test_rejects_reciprocal_pair() {
        let (alice, bob, _) = people();
        let mut current = PartialAssignment::new();
        current.insert(&bob, &alice);

        assert!(!is_valid_pair(&ForbiddenPairs::new(), &alice, &bob, &current));
    }

    #[test]
    fn test_accepts_plain_cross_family_pair() {
        let (alice, bob, _) = people();
        let carol = Participant::adult("Carol", "F3");
        let mut current = PartialAssignment::new();
        current.insert(&bob, &carol);

        assert!(is_valid_pair(&ForbiddenPairs::new(), &alice, &bob, &current));
    }

    #[test]
    fn test_direction_allows_reverse() {
        let (alice, bob, _) = people();
        assert!(satisfies_direction_constraint([(&alice, &bob), (&bob, &alice)]));
    }

    #[test]
    fn test_direction_rejects_repeat() {
        let (alice, bob, amy) = people();
        let bea = Participant::adult("Bea", "F2");
        assert!(!satisfies_direction_constraint([(&alice, &bob), (&amy, &bea)]));
    }

    #[test]
    fn test_direction_ignores_kids() {
        let ann = Participant::kid("Ann", "F1");
        let ada = Participant::kid("Ada", "F1");
        let ben = Participant::kid("Ben", "F2");
        let bo = Participant::kid("Bo", "F2");
        assert!(satisfies_direction_constraint([(&ann, &ben), (&ada, &bo)]));
    }
}
