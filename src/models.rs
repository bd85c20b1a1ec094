//! Data models for the league table generator.
//!
//! Input types mirror the season documents published by football data
//! feeds (`name` + `rounds` + `matches`), output types mirror the
//! standings document handed to the serializer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which team field identifies a team for the whole run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierField {
    /// The long `key` field (default).
    #[default]
    Key,
    /// The short `code` field.
    Code,
}

impl fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierField::Key => write!(f, "key"),
            IdentifierField::Code => write!(f, "code"),
        }
    }
}

/// A team reference inside a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl Team {
    /// Returns the identifier selected by `field`, if the team carries it.
    ///
    /// There is no fallback to the other field: a feed that only fills in
    /// `code` has to be read with [`IdentifierField::Code`].
    pub fn identifier(&self, field: IdentifierField) -> Option<&str> {
        let value = match field {
            IdentifierField::Key => self.key.as_deref(),
            IdentifierField::Code => self.code.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// A single finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub date: Option<String>,
    pub team1: Team,
    pub team2: Team,
    #[serde(default)]
    pub score1: Option<u32>,
    #[serde(default)]
    pub score2: Option<u32>,
}

/// A named matchday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// The input document: one season of one league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Season {
    /// Total number of matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }
}

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub defeats: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_diff: i64,
    pub points: u64,
}

/// The output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub name: String,
    pub table: Vec<RankingRow>,
}
