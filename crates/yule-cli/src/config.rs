//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where rosters and history files live
    #[serde(default)]
    pub data: DataConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Data file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding all data files
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Roster file name, relative to `dir`
    #[serde(default = "default_people_file")]
    pub people_file: String,

    /// Previous draw, read to forbid repeats
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Where a new draw is written
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".yule").join("config.toml"))
    }

    /// Load configuration from `path` (or the default path), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

impl DataConfig {
    /// Full path of the roster file.
    pub fn people_path(&self) -> PathBuf {
        self.dir.join(&self.people_file)
    }

    /// Full path of the previous draw.
    ///
    /// With a year, this is the file written by the draw of the year before.
    pub fn history_path(&self, year: Option<u32>) -> PathBuf {
        match year {
            Some(year) => self.dir.join(year_file(year.saturating_sub(1))),
            None => self.dir.join(&self.history_file),
        }
    }

    /// Full path a new draw is written to.
    pub fn output_path(&self, year: Option<u32>) -> PathBuf {
        match year {
            Some(year) => self.dir.join(year_file(year)),
            None => self.dir.join(&self.output_file),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            people_file: default_people_file(),
            history_file: default_history_file(),
            output_file: default_output_file(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn year_file(year: u32) -> String {
    format!("assignments_{}.json", year)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_people_file() -> String {
    "people.json".to_string()
}

fn default_history_file() -> String {
    "assignments_previous.json".to_string()
}

fn default_output_file() -> String {
    "assignments.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.people_path(), PathBuf::from("data/people.json"));
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_year_paths() {
        let data = DataConfig::default();
        assert_eq!(
            data.history_path(Some(2025)),
            PathBuf::from("data/assignments_2024.json")
        );
        assert_eq!(
            data.output_path(Some(2025)),
            PathBuf::from("data/assignments_2025.json")
        );
        assert_eq!(
            data.history_path(None),
            PathBuf::from("data/assignments_previous.json")
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.data.people_file, "people.json");
        // Loading never writes a config file
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[data]\ndir = \"/srv/yule\"\n\n[settings]\nformat = \"json\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.data.people_path(), PathBuf::from("/srv/yule/people.json"));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings\ncolor = ").unwrap();

        assert!(matches!(Config::load(Some(path.as_path())), Err(CliError::Toml(_))));
    }
}
