//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.league-table.toml` files.

use crate::cli::{Args, OutputFormat};
use anyhow::{Context, Result};
use league_table::{IdentifierField, TableRules};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = ".league-table.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Points settings.
    #[serde(default)]
    pub points: PointsConfig,

    /// Team identification settings.
    #[serde(default)]
    pub teams: TeamsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path (standard output when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

/// Points awarded per result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_win")]
    pub win: u32,

    #[serde(default = "default_draw")]
    pub draw: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            win: default_win(),
            draw: default_draw(),
        }
    }
}

fn default_win() -> u32 {
    3
}

fn default_draw() -> u32 {
    1
}

/// How teams are identified across matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamsConfig {
    /// Team field used as the identifier (`key` or `code`).
    #[serde(default)]
    pub identifier: IdentifierField,

    /// Reject identifiers seen under more than one team name.
    #[serde(default)]
    pub strict_names: bool,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load `.league-table.toml` from `dir`.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Load the explicit config file if given, else the one in `dir`, else defaults.
    ///
    /// A config file that exists but cannot be parsed is an error either way.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        Ok(Self::load_from_dir(dir)?.unwrap_or_default())
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// Only values given explicitly on the command line override.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref output) = args.output {
            self.general.output = Some(output.display().to_string());
        }
        if let Some(format) = args.format {
            self.general.format = format;
        }
        if args.pretty {
            self.general.pretty = true;
        }

        if let Some(win) = args.win_points {
            self.points.win = win;
        }
        if let Some(draw) = args.draw_points {
            self.points.draw = draw;
        }

        if let Some(identifier) = args.identifier {
            self.teams.identifier = identifier;
        }
        if args.strict_names {
            self.teams.strict_names = true;
        }
    }

    /// Rules handed to the table pipeline.
    pub fn table_rules(&self) -> TableRules {
        TableRules {
            win_points: self.points.win,
            draw_points: self.points.draw,
            identifier: self.teams.identifier,
            strict_names: self.teams.strict_names,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        let config = Config::default();
        toml::to_string_pretty(&config).context("Failed to serialize default config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.points.win, 3);
        assert_eq!(config.points.draw, 1);
        assert_eq!(config.general.format, OutputFormat::Json);
        assert_eq!(config.table_rules(), TableRules::default());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "table.md"
format = "markdown"

[points]
win = 2

[teams]
identifier = "code"
strict_names = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output.as_deref(), Some("table.md"));
        assert_eq!(config.general.format, OutputFormat::Markdown);
        assert!(!config.general.pretty);
        assert_eq!(config.points.win, 2);
        assert_eq!(config.points.draw, 1);
        assert_eq!(config.teams.identifier, IdentifierField::Code);
        assert!(config.teams.strict_names);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[points]\ndraw = 0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.points.win, 3);
        assert_eq!(config.points.draw, 0);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[points]\nwin = \"three\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let args = Args::try_parse_from([
            "league-table",
            "--pretty",
            "--draw-points",
            "0",
            "--identifier",
            "code",
        ])
        .unwrap();

        let mut config = Config::default();
        config.points.win = 2;
        config.merge_with_args(&args);

        let rules = config.table_rules();
        assert_eq!(rules.win_points, 2);
        assert_eq!(rules.draw_points, 0);
        assert_eq!(rules.identifier, IdentifierField::Code);
        assert!(config.general.pretty);
        assert_eq!(config.general.output, None);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml().unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[points]"));
        assert!(toml_str.contains("[teams]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.table_rules(), TableRules::default());
    }

    #[test]
    fn test_resolve_malformed_default_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[points]\nwin = \"2\"\n").unwrap();

        assert!(Config::load_from_dir(dir.path()).is_err());
        assert!(Config::resolve(None, dir.path()).is_err());
    }

    #[test]
    fn test_resolve_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.table_rules(), TableRules::default());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[points]\nwin = 2\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[points]\nwin = 4\n").unwrap();

        let config = Config::resolve(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.points.win, 4);

        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.points.win, 2);
    }
}
