//! History command implementation.

use crate::cli::{HistoryAction, HistoryArgs, HistoryFileArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::{Path, PathBuf};
use yule_store::{JsonHistoryStore, JsonParticipantStore, LoadedHistory};

/// Execute a history subcommand.
pub fn execute_history(args: HistoryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let roster = JsonParticipantStore::new(config.data.people_path()).load()?;

    match args.action {
        HistoryAction::Show(file_args) => {
            let path = resolve_path(file_args, config);
            if !path.exists() {
                let msg = format!("No assignment file at {}", path.display());
                formatter.status(&formatter.warning(&msg));
                return Ok(());
            }

            let history = JsonHistoryStore::new(&path).load(&roster)?;
            report_upgrade(&history, &path, formatter);
            println!("{}", formatter.format_pairings(&history.records)?);
        }
        HistoryAction::Upgrade(file_args) => {
            let path = resolve_path(file_args, config);
            let history = JsonHistoryStore::new(&path).load(&roster)?;
            if history.upgraded {
                report_upgrade(&history, &path, formatter);
            } else {
                let msg = format!("{} is already in the current format", path.display());
                formatter.status(&formatter.info(&msg));
            }
        }
    }

    Ok(())
}

fn resolve_path(args: HistoryFileArgs, config: &Config) -> PathBuf {
    match (args.file, args.year) {
        (Some(file), _) => file,
        (None, Some(year)) => config.data.output_path(Some(year)),
        (None, None) => config.data.history_path(None),
    }
}

fn report_upgrade(history: &LoadedHistory, path: &Path, formatter: &Formatter) {
    if !history.upgraded {
        return;
    }

    let msg = format!(
        "Upgraded {} to the current format ({} kept, {} skipped).",
        path.display(),
        history.records.len(),
        history.skipped.len()
    );
    formatter.status(&formatter.success(&msg));
    for skipped in &history.skipped {
        let msg = format!(
            "Skipped: could not find {} or {} in the roster",
            skipped.giver, skipped.recipient
        );
        formatter.status(&formatter.warning(&msg));
    }
}
