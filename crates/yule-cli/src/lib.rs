//! Yule CLI library.
//!
//! This library provides the core functionality for the `yule` command-line
//! interface, including configuration management, the interactive roster
//! editor, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use editor::{Editor, LinePrompter, Prompter};
pub use error::{CliError, Result};
pub use output::Formatter;
