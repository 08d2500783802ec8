//! Interactive roster editing, run before a draw.
//!
//! The editor asks line-oriented questions through a [`Prompter`] and writes
//! its messages to any [`Write`] sink, so a session can be scripted in tests.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use yule_domain::Participant;

/// Source of answers to editor questions.
pub trait Prompter {
    /// Show `prompt` and read one line; `None` means input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompter backed by a terminal line editor.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    /// Create a prompter on the controlling terminal.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for LinePrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(CliError::Readline(e)),
        }
    }
}

/// An editing session over a roster.
pub struct Editor<'f, P, W> {
    prompter: P,
    out: W,
    formatter: &'f Formatter,
}

impl<'f, P: Prompter, W: Write> Editor<'f, P, W> {
    /// Create a session.
    pub fn new(prompter: P, out: W, formatter: &'f Formatter) -> Self {
        Self {
            prompter,
            out,
            formatter,
        }
    }

    /// Give back the prompter and output sink.
    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    /// Offer to add participants; returns how many were added.
    ///
    /// A blank name ends the session. Names already on the roster are refused.
    pub fn add_participants(&mut self, people: &mut Vec<Participant>) -> Result<usize> {
        if !self.confirm("Do you want to add any new participants? (y/n): ")? {
            return Ok(0);
        }

        let mut added = 0;
        loop {
            let name = match self.ask_trimmed("Enter name (or blank to finish): ")? {
                Some(name) if !name.is_empty() => name,
                _ => break,
            };

            if people.iter().any(|p| p.name == name) {
                let msg = format!("A participant named {} already exists.", name);
                writeln!(self.out, "{}", self.formatter.warning(&msg))?;
                continue;
            }

            let Some(family_id) = self.ask_trimmed(&format!("Enter family ID for {}: ", name))? else {
                break;
            };
            if family_id.is_empty() {
                writeln!(self.out, "{}", self.formatter.warning("Family ID cannot be empty; skipped."))?;
                continue;
            }

            let is_kid = self.confirm(&format!("Is {} a kid? (y/n): ", name))?;

            let participant = Participant::new(name, family_id, is_kid);
            writeln!(self.out, "{}", self.formatter.success(&format!("Added: {}", participant)))?;
            people.push(participant);
            added += 1;
        }

        Ok(added)
    }

    /// Offer to remove participants; returns everyone removed.
    ///
    /// Names match case-insensitively. When several participants match, one
    /// is picked by number. After confirming, the whole family can be removed
    /// instead of just the chosen person.
    pub fn remove_participants(&mut self, people: &mut Vec<Participant>) -> Result<Vec<Participant>> {
        let mut removed = Vec::new();

        loop {
            writeln!(self.out)?;
            writeln!(self.out, "Current participants:")?;
            for person in people.iter() {
                writeln!(self.out, " - {}", person)?;
            }

            if !self.confirm("Do you want to remove anyone? (y/n): ")? {
                break;
            }

            let input = match self.ask_trimmed("Enter the name of the person to remove (or blank to cancel): ")? {
                Some(input) if !input.is_empty() => input,
                _ => break,
            };

            let wanted = input.to_lowercase();
            let matches: Vec<Participant> = people
                .iter()
                .filter(|p| p.name.to_lowercase() == wanted)
                .cloned()
                .collect();

            let target = match matches.len() {
                0 => {
                    let msg = format!("No participant found with the name \"{}\". Please try again.", input);
                    writeln!(self.out, "{}", self.formatter.warning(&msg))?;
                    continue;
                }
                1 => matches[0].clone(),
                _ => match self.choose(&input, &matches)? {
                    Some(target) => target,
                    None => {
                        writeln!(self.out, "{}", self.formatter.info("Invalid selection, cancellation assumed."))?;
                        continue;
                    }
                },
            };

            removed.extend(self.confirm_removal(people, &target)?);
        }

        Ok(removed)
    }

    fn choose(&mut self, input: &str, matches: &[Participant]) -> Result<Option<Participant>> {
        writeln!(self.out, "Multiple participants found with the name \"{}\":", input)?;
        for (index, person) in matches.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", index, person)?;
        }

        let selection = self.ask_trimmed("Enter the number of the person to remove (or blank to cancel): ")?;
        Ok(selection
            .and_then(|s| s.parse::<usize>().ok())
            .and_then(|index| matches.get(index).cloned()))
    }

    fn confirm_removal(&mut self, people: &mut Vec<Participant>, target: &Participant) -> Result<Vec<Participant>> {
        let prompt = format!("Remove {} (family: {})? (y/n): ", target.name, target.family_id);
        if !self.confirm(&prompt)? {
            writeln!(self.out, "{}", self.formatter.info("Removal cancelled."))?;
            return Ok(Vec::new());
        }

        let prompt = format!("Also remove all members of family {}? (y/n): ", target.family_id);
        if self.confirm(&prompt)? {
            let (family, rest): (Vec<Participant>, Vec<Participant>) = people
                .drain(..)
                .partition(|p| p.family_id == target.family_id);
            *people = rest;

            let names: Vec<&str> = family.iter().map(|p| p.name.as_str()).collect();
            let msg = format!("Removed entire family {}: {}", target.family_id, names.join(", "));
            writeln!(self.out, "{}", self.formatter.success(&msg))?;
            Ok(family)
        } else {
            if let Some(position) = people.iter().position(|p| p == target) {
                people.remove(position);
            }
            let msg = format!("{} has been removed.", target.name);
            writeln!(self.out, "{}", self.formatter.success(&msg))?;
            Ok(vec![target.clone()])
        }
    }

    fn ask_trimmed(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.prompter.ask(prompt)?.map(|line| line.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask_trimmed(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
    }
}
