//! Roster management command implementation.

use crate::cli::{PeopleAction, PeopleArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use yule_domain::Participant;
use yule_store::JsonParticipantStore;

/// Execute a people subcommand against the configured roster.
pub fn execute_people(args: PeopleArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = JsonParticipantStore::new(config.data.people_path());
    let mut people = store.load()?;

    match args.action {
        PeopleAction::List => {
            println!("{}", formatter.format_participants(&people)?);
        }
        PeopleAction::Add { name, family, kid } => {
            let participant = add_participant(&mut people, &name, &family, kid)?;
            store.save(&people)?;
            formatter.status(&formatter.success(&format!("Added: {}", participant)));
        }
        PeopleAction::Remove { name, whole_family } => {
            let removed = remove_participant(&mut people, &name, whole_family)?;
            store.save(&people)?;
            let names: Vec<&str> = removed.iter().map(|p| p.name.as_str()).collect();
            formatter.status(&formatter.success(&format!("Removed: {}", names.join(", "))));
        }
    }

    Ok(())
}

/// Append a participant, refusing blank fields and duplicate names.
pub fn add_participant(
    people: &mut Vec<Participant>,
    name: &str,
    family: &str,
    is_kid: bool,
) -> Result<Participant> {
    let (name, family) = (name.trim(), family.trim());
    if name.is_empty() || family.is_empty() {
        return Err(CliError::InvalidInput("Name and family ID are required".to_string()));
    }
    if people.iter().any(|p| p.name == name) {
        return Err(CliError::InvalidInput(format!(
            "A participant named '{}' already exists",
            name
        )));
    }

    let participant = Participant::new(name, family, is_kid);
    people.push(participant.clone());
    Ok(participant)
}

/// Remove a participant (optionally with their family); returns who was removed.
///
/// An exact name match wins; otherwise the name must match exactly one
/// participant case-insensitively.
pub fn remove_participant(
    people: &mut Vec<Participant>,
    name: &str,
    whole_family: bool,
) -> Result<Vec<Participant>> {
    let target = find_one(people, name)?.clone();

    let removed: Vec<Participant> = if whole_family {
        people
            .iter()
            .filter(|p| p.family_id == target.family_id)
            .cloned()
            .collect()
    } else {
        vec![target]
    };

    people.retain(|p| !removed.contains(p));
    Ok(removed)
}

fn find_one<'a>(people: &'a [Participant], name: &str) -> Result<&'a Participant> {
    if let Some(exact) = people.iter().find(|p| p.name == name) {
        return Ok(exact);
    }

    let wanted = name.to_lowercase();
    let matches: Vec<&Participant> = people
        .iter()
        .filter(|p| p.name.to_lowercase() == wanted)
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        [] => Err(CliError::InvalidInput(format!(
            "No participant found with the name '{}'",
            name
        ))),
        _ => Err(CliError::InvalidInput(format!(
            "'{}' matches {} participants; use the exact name",
            name,
            matches.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Participant> {
        vec![
            Participant::adult("Alice", "F1"),
            Participant::adult("Bob", "F2"),
            Participant::kid("Ann", "F1"),
        ]
    }

    #[test]
    fn test_add_participant() {
        let mut people = roster();
        let added = add_participant(&mut people, " Ben ", "F2", true).unwrap();

        assert_eq!(added, Participant::kid("Ben", "F2"));
        assert_eq!(people.len(), 4);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut people = roster();
        assert!(add_participant(&mut people, "Alice", "F3", false).is_err());
        assert!(add_participant(&mut people, "Zed", " ", false).is_err());
        assert_eq!(people.len(), 3);
    }

    #[test]
    fn test_remove_case_insensitive() {
        let mut people = roster();
        let removed = remove_participant(&mut people, "bob", false).unwrap();

        assert_eq!(removed, vec![Participant::adult("Bob", "F2")]);
        assert_eq!(people.len(), 2);
    }

    #[test]
    fn test_remove_whole_family() {
        let mut people = roster();
        let removed = remove_participant(&mut people, "Ann", true).unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(people, vec![Participant::adult("Bob", "F2")]);
    }

    #[test]
    fn test_remove_ambiguous_or_missing() {
        let mut people = vec![Participant::adult("Sam", "F1"), Participant::adult("SAM", "F2")];
        assert!(remove_participant(&mut people, "sam", false).is_err());
        assert!(remove_participant(&mut people, "Zed", false).is_err());

        // Exact match resolves the ambiguity
        let removed = remove_participant(&mut people, "SAM", false).unwrap();
        assert_eq!(removed, vec![Participant::adult("SAM", "F2")]);
    }
}
