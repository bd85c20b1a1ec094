//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use league_table::IdentifierField;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// league-table - football league standings from match results
///
/// Reads a season document (name + rounds + matches) and prints the
/// ranked table: points, then goal difference, then goals scored.
///
/// Examples:
///   league-table en.1.json
///   league-table en.1.json --pretty -o table.json
///   cat en.1.json | league-table --format markdown
///   league-table en.1.json --win-points 2
///   league-table --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Season JSON file to read
    ///
    /// Reads standard input when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file path for the table
    ///
    /// Writes to standard output when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .league-table.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (json, markdown)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Points awarded for a win
    #[arg(long, value_name = "PTS", env = "LEAGUE_TABLE_WIN_POINTS")]
    pub win_points: Option<u32>,

    /// Points awarded for a draw
    #[arg(long, value_name = "PTS", env = "LEAGUE_TABLE_DRAW_POINTS")]
    pub draw_points: Option<u32>,

    /// Team field used to identify teams (key, code)
    #[arg(long, value_name = "FIELD")]
    pub identifier: Option<IdentifierField>,

    /// Fail when one identifier appears under two team names
    #[arg(long)]
    pub strict_names: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .league-table.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document (default)
    #[default]
    Json,
    /// Markdown report
    Markdown,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Input path, or `None` for standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(path) = self.input_path() {
            if !path.exists() {
                return Err(format!("Input file does not exist: {}", path.display()));
            }
            if !path.is_file() {
                return Err(format!("Input path is not a file: {}", path.display()));
            }
        }

        if let (Some(win), Some(draw)) = (self.win_points, self.draw_points) {
            if win < draw {
                return Err("--win-points must be at least --draw-points".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
