//! Match aggregation into per-team records.
//!
//! This module walks every match of a season once and keeps running
//! totals per team, plus a few season-wide statistics for reports.

use crate::analysis::rules::TableRules;
use crate::error::{Result, TableError};
use crate::models::{Match, Round, Team};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Running totals for one team.
///
/// Only base counters are stored. Goal difference, defeats and points are
/// derived from them on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub identifier: String,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub goals_for: u64,
    pub goals_against: u64,
}

impl TeamRecord {
    /// Creates an empty record named after `team`.
    pub fn new(identifier: &str, team: &Team) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: team.name.clone(),
            games_played: 0,
            wins: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    /// Records one match from this team's point of view.
    pub fn add_match(&mut self, goals_for: u32, goals_against: u32) {
        if goals_for == goals_against {
            self.draws += 1;
        } else if goals_for > goals_against {
            self.wins += 1;
        }

        self.goals_for += u64::from(goals_for);
        self.goals_against += u64::from(goals_against);
        self.games_played += 1;
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn defeats(&self) -> u32 {
        self.games_played - self.wins - self.draws
    }

    pub fn points(&self, rules: &TableRules) -> u64 {
        u64::from(self.wins) * u64::from(rules.win_points)
            + u64::from(self.draws) * u64::from(rules.draw_points)
    }
}

/// Team records keyed by identifier, iterated in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct TeamMap {
    records: Vec<TeamRecord>,
    index: HashMap<String, usize>,
}

impl TeamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&TeamRecord> {
        self.index.get(identifier).map(|&i| &self.records[i])
    }

    /// Records in the order their identifiers were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &TeamRecord> {
        self.records.iter()
    }

    /// Returns the record for `identifier`, creating it on first sighting.
    ///
    /// A known identifier under a different display name is an error in
    /// strict mode and keeps the first-seen name otherwise.
    fn entry(
        &mut self,
        identifier: &str,
        team: &Team,
        rules: &TableRules,
    ) -> Result<&mut TeamRecord> {
        let idx = match self.index.get(identifier).copied() {
            Some(idx) => {
                let known = &self.records[idx].name;
                if *known != team.name {
                    if rules.strict_names {
                        return Err(TableError::AmbiguousIdentifier {
                            identifier: identifier.to_string(),
                            first: known.clone(),
                            other: team.name.clone(),
                        });
                    }
                    warn!(
                        "Team `{}` also appears as `{}`, keeping `{}`",
                        identifier, team.name, known
                    );
                }
                idx
            }
            None => {
                debug!("New team: {} ({})", team.name, identifier);
                self.records.push(TeamRecord::new(identifier, team));
                self.index
                    .insert(identifier.to_string(), self.records.len() - 1);
                self.records.len() - 1
            }
        };

        Ok(&mut self.records[idx])
    }
}

/// Build per-team records from every match of every round.
///
/// Fails on the first malformed match. Nothing is returned in that case,
/// so no partially updated totals can escape.
pub fn aggregate_teams(rounds: &[Round], rules: &TableRules) -> Result<TeamMap> {
    let mut map = TeamMap::new();

    for round in rounds {
        for (position, m) in round.matches.iter().enumerate() {
            let checked = check_match(round, position, m, rules)?;

            map.entry(checked.id1, &m.team1, rules)?
                .add_match(checked.score1, checked.score2);
            map.entry(checked.id2, &m.team2, rules)?
                .add_match(checked.score2, checked.score1);
        }
    }

    debug!("Aggregated {} teams from {} rounds", map.len(), rounds.len());
    Ok(map)
}

/// Identifiers and scores of a match that passed validation.
struct CheckedMatch<'a> {
    id1: &'a str,
    id2: &'a str,
    score1: u32,
    score2: u32,
}

fn check_match<'a>(
    round: &Round,
    position: usize,
    m: &'a Match,
    rules: &TableRules,
) -> Result<CheckedMatch<'a>> {
    let malformed = |what: String| {
        TableError::MalformedInput(format!(
            "round `{}`, match {}: {}",
            round.name,
            position + 1,
            what
        ))
    };

    let id1 = m
        .team1
        .identifier(rules.identifier)
        .ok_or_else(|| malformed(format!("team1 has no `{}`", rules.identifier)))?;
    let id2 = m
        .team2
        .identifier(rules.identifier)
        .ok_or_else(|| malformed(format!("team2 has no `{}`", rules.identifier)))?;
    if id1 == id2 {
        return Err(malformed(format!("team `{}` plays itself", id1)));
    }

    let score1 = m.score1.ok_or_else(|| malformed("missing score1".to_string()))?;
    let score2 = m.score2.ok_or_else(|| malformed("missing score2".to_string()))?;

    Ok(CheckedMatch {
        id1,
        id2,
        score1,
        score2,
    })
}

/// Season-wide numbers shown alongside the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonSummary {
    pub rounds: usize,
    pub matches: usize,
    pub goals: u64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl SeasonSummary {
    /// Average goals per match, or zero for an empty season.
    pub fn goals_per_match(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.goals as f64 / self.matches as f64
        }
    }
}

/// Count rounds, matches and goals and find the span of match dates.
pub fn summarize_season(rounds: &[Round]) -> SeasonSummary {
    let mut summary = SeasonSummary {
        rounds: rounds.len(),
        ..SeasonSummary::default()
    };

    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        summary.matches += 1;
        summary.goals += u64::from(m.score1.unwrap_or(0)) + u64::from(m.score2.unwrap_or(0));

        let Some(raw) = m.date.as_deref() else {
            continue;
        };
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => {
                summary.first_date = Some(summary.first_date.map_or(date, |d| d.min(date)));
                summary.last_date = Some(summary.last_date.map_or(date, |d| d.max(date)));
            }
            Err(e) => debug!("Ignoring match date `{}`: {}", raw, e),
        }
    }

    summary
}
