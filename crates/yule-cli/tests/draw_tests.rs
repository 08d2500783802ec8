//! End-to-end tests for the draw pipeline: roster file, history file, solve.

use std::fs;
use tempfile::TempDir;
use yule_cli::commands::draw_assignment;
use yule_cli::config::OutputFormat;
use yule_cli::{CliError, Formatter};
use yule_domain::{Participant, PoolKind};
use yule_solver::SolveError;
use yule_store::{JsonHistoryStore, JsonParticipantStore};

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

fn family_roster() -> Vec<Participant> {
    vec![
        Participant::adult("Alice", "F1"),
        Participant::adult("Bob", "F2"),
        Participant::adult("Carol", "F3"),
        Participant::kid("Ann", "F1"),
        Participant::kid("Ben", "F2"),
        Participant::kid("Cal", "F3"),
    ]
}

#[test]
fn test_draw_avoids_last_year() {
    let dir = TempDir::new().unwrap();
    let people = family_roster();
    let last_year = JsonHistoryStore::new(dir.path().join("assignments_2024.json"));
    let first = draw_assignment(&people, &last_year, &people, &formatter()).unwrap();
    last_year.save(&first).unwrap();

    let this_year = draw_assignment(&people, &last_year, &people, &formatter()).unwrap();

    assert_eq!(this_year.len(), 6);
    for pairing in &this_year {
        assert_ne!(first.recipient_of(&pairing.giver), Some(&pairing.recipient));
    }
}

#[test]
fn test_draw_upgrades_legacy_history() {
    let dir = TempDir::new().unwrap();
    let people = family_roster();
    let path = dir.path().join("assignments_2024.json");
    fs::write(&path, r#"[{"giver": "Alice", "recipient": "Bob"}]"#).unwrap();

    let assignment =
        draw_assignment(&people, &JsonHistoryStore::new(&path), &people, &formatter()).unwrap();

    assert_ne!(assignment.recipient_of(&people[0]), Some(&people[1]));
    assert!(fs::read_to_string(&path).unwrap().contains("familyId"));
}

#[test]
fn test_draw_rejects_duplicate_names() {
    let dir = TempDir::new().unwrap();
    let people = vec![
        Participant::adult("Alice", "F1"),
        Participant::adult("Alice", "F2"),
    ];
    let history = JsonHistoryStore::new(dir.path().join("none.json"));

    let result = draw_assignment(&people, &history, &people, &formatter());

    assert!(matches!(result, Err(CliError::Roster(_))));
}

#[test]
fn test_draw_reports_unsatisfiable_pool() {
    let dir = TempDir::new().unwrap();
    let people = vec![
        Participant::adult("Alice", "F1"),
        Participant::adult("Bob", "F2"),
        Participant::adult("Carol", "F3"),
        Participant::kid("Ann", "F1"),
        Participant::kid("Ada", "F1"),
    ];
    let history = JsonHistoryStore::new(dir.path().join("none.json"));

    let err = draw_assignment(&people, &history, &people, &formatter()).unwrap_err();

    assert!(matches!(
        err,
        CliError::Solve(SolveError::Unsatisfiable {
            pool: PoolKind::Kids
        })
    ));
    assert_eq!(err.to_string(), "No valid solution for kids");
}

#[test]
fn test_roster_file_feeds_draw() {
    let dir = TempDir::new().unwrap();
    let roster_path = dir.path().join("people.json");
    fs::write(
        &roster_path,
        r#"[
            {"name": "Alice", "familyId": "F1", "isKid": false},
            {"name": "Bob", "familyId": "F2", "isKid": false},
            {"name": "Carol", "familyId": "F3", "isKid": false}
        ]"#,
    )
    .unwrap();
    let people = JsonParticipantStore::new(&roster_path).load().unwrap();
    let history = JsonHistoryStore::new(dir.path().join("none.json"));

    let assignment = draw_assignment(&people, &history, &people, &formatter()).unwrap();

    let quiet = formatter().format_pairings(&assignment.to_records()).unwrap();
    assert_eq!(quiet, "Alice -> Bob\nBob -> Carol\nCarol -> Alice");
}
