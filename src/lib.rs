//! League table generation from a season of match results.
//!
//! The pipeline aggregates every match into per-team records, ranks the
//! records by points, goal difference and goals scored, and wraps the
//! ranked rows with the season name:
//!
//! ```
//! use league_table::{generate_league_table, TableRules};
//!
//! let input = r#"{"name":"Demo","rounds":[{"name":"Matchday 1","matches":[
//!     {"team1":{"key":"a","name":"Alpha"},"team2":{"key":"b","name":"Beta"},
//!      "score1":2,"score2":0}]}]}"#;
//! let json = generate_league_table(input, &TableRules::default()).unwrap();
//! assert!(json.starts_with(r#"{"name":"Demo","table":[{"rank":1,"name":"Alpha""#));
//! ```

pub mod analysis;
pub mod error;
pub mod models;
pub mod report;

pub use analysis::{SeasonSummary, TableRules};
pub use error::{Result, TableError};
pub use models::{IdentifierField, LeagueTable, RankingRow, Season};

use tracing::debug;

/// Build the ranked table for `season`.
pub fn build_league_table(season: &Season, rules: &TableRules) -> Result<LeagueTable> {
    rules.validate()?;

    let teams = analysis::aggregate_teams(&season.rounds, rules)?;
    let table = analysis::rank_teams(&teams, rules);
    debug!(
        "Ranked {} teams from {} matches",
        table.len(),
        season.match_count()
    );

    Ok(LeagueTable {
        name: season.name.clone().unwrap_or_default(),
        table,
    })
}

/// Parse a season document and return its table as compact JSON.
pub fn generate_league_table(input_json: &str, rules: &TableRules) -> Result<String> {
    let season = parse_season(input_json)?;
    let table = build_league_table(&season, rules)?;
    report::generate_json_report(&table, false)
}

/// Parse a season document.
pub fn parse_season(input_json: &str) -> Result<Season> {
    Ok(serde_json::from_str(input_json)?)
}
