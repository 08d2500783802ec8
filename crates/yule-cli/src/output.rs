//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use yule_domain::{PairingRecord, Participant, PoolKind};
use yule_store::{ParticipantRecord, StoredPairing};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format giver → recipient pairings.
    pub fn format_pairings(&self, records: &[PairingRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let stored: Vec<StoredPairing> = records.iter().map(Into::into).collect();
                Ok(serde_json::to_string_pretty(&stored)?)
            }
            OutputFormat::Table => Ok(self.format_pairings_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| format!("{} -> {}", r.giver.name, r.recipient.name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a roster.
    pub fn format_participants(&self, participants: &[Participant]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<ParticipantRecord> = participants.iter().map(Into::into).collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Table => Ok(self.format_participants_table(participants)),
            OutputFormat::Quiet => Ok(participants
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_pairings_table(&self, records: &[PairingRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No pairings.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Giver", "Recipient", "Pool"]);

        for record in records {
            builder.push_record([
                record.giver.name.as_str(),
                record.recipient.name.as_str(),
                PoolKind::of(&record.giver).as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_participants_table(&self, participants: &[Participant]) -> String {
        if participants.is_empty() {
            return self.colorize("No participants.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Family", "Group"]);

        for participant in participants {
            builder.push_record([
                participant.name.as_str(),
                participant.family_id.as_str(),
                participant.age_group(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Whether status lines go to stderr, leaving stdout to the data alone.
    pub fn status_on_stderr(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a progress or status line that is not part of the data output.
    pub fn status(&self, line: &str) {
        if self.status_on_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
