//! Draw command implementation.

use crate::cli::DrawArgs;
use crate::config::Config;
use crate::editor::{Editor, LinePrompter};
use crate::error::Result;
use crate::output::Formatter;
use std::io::{self, Write};
use tracing::{debug, info};
use yule_domain::{validate_roster, Assignment, Participant};
use yule_solver::PairingSolver;
use yule_store::{JsonHistoryStore, JsonParticipantStore};

/// Execute the draw command.
pub fn execute_draw(args: DrawArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let people_store = JsonParticipantStore::new(config.data.people_path());
    let mut people = people_store.load()?;
    formatter.status(&formatter.info(&format!("Loaded {} participants.", people.len())));

    if !args.no_edit {
        let out: Box<dyn Write> = if formatter.status_on_stderr() {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        let mut editor = Editor::new(LinePrompter::new()?, out, formatter);

        if editor.add_participants(&mut people)? > 0 {
            people_store.save(&people)?;
            let msg = format!("Updated people list saved to {}", people_store.path().display());
            formatter.status(&formatter.success(&msg));
        }

        // Removals only apply to this draw
        editor.remove_participants(&mut people)?;
    }

    let previous = args
        .previous
        .unwrap_or_else(|| config.data.history_path(args.year));
    let output = args.output.unwrap_or_else(|| config.data.output_path(args.year));

    // Legacy history is resolved against the stored roster, not this draw's
    let stored_roster = people_store.load()?;
    let history = JsonHistoryStore::new(&previous);
    let assignment = draw_assignment(&people, &history, &stored_roster, formatter)?;

    formatter.status("");
    formatter.status(&formatter.info("Gift Exchange Assignments:"));
    println!("{}", formatter.format_pairings(&assignment.to_records())?);
    formatter.status(&format!("Pairings size: {}", assignment.len()));

    if args.dry_run {
        formatter.status(&formatter.warning("Dry run: assignment not saved"));
        return Ok(());
    }

    JsonHistoryStore::new(&output).save(&assignment)?;
    let msg = format!("Saved {} pairings to {}", assignment.len(), output.display());
    formatter.status(&formatter.success(&msg));

    Ok(())
}

/// Validate the roster, load the previous draw, and solve.
///
/// Fails without side effects (beyond a legacy history upgrade) when the
/// roster is malformed or a pool has no valid assignment.
pub fn draw_assignment(
    people: &[Participant],
    history: &JsonHistoryStore,
    stored_roster: &[Participant],
    formatter: &Formatter,
) -> Result<Assignment> {
    validate_roster(people)?;

    let loaded = history.load(stored_roster)?;
    if loaded.upgraded {
        let msg = format!("Upgraded {} to the current format.", history.path().display());
        formatter.status(&formatter.info(&msg));
    }
    for skipped in &loaded.skipped {
        let msg = format!(
            "Skipping: could not find {} or {} in the roster",
            skipped.giver, skipped.recipient
        );
        formatter.status(&formatter.warning(&msg));
    }

    let forbidden = loaded.forbidden_pairs();
    debug!(forbidden = forbidden.len(), "Forbidden pairs loaded from history");

    let report = PairingSolver::new(&forbidden).solve_with_report(people)?;
    info!(
        pairings = report.assignment.len(),
        adults = %report.adults,
        kids = %report.kids,
        "Draw complete"
    );

    Ok(report.assignment)
}
