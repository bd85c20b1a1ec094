//! JSON and Markdown rendering of a league table.

use crate::analysis::SeasonSummary;
use crate::error::{Result, TableError};
use crate::models::{LeagueTable, RankingRow};

/// Serialize the table as JSON.
///
/// Compact output is a single line with fields in declaration order, so
/// identical tables always produce identical bytes.
pub fn generate_json_report(table: &LeagueTable, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(table)
    } else {
        serde_json::to_string(table)
    };
    json.map_err(TableError::Serialize)
}

/// Generate a Markdown standings report.
pub fn generate_markdown_report(table: &LeagueTable, summary: &SeasonSummary) -> String {
    let mut output = String::new();

    // Title
    let title = if table.name.is_empty() {
        "League Table"
    } else {
        table.name.as_str()
    };
    output.push_str(&format!("# {}\n\n", escape_markdown(title)));

    output.push_str(&generate_summary_section(summary));
    output.push_str(&generate_standings_section(&table.table));

    output
}

fn generate_summary_section(summary: &SeasonSummary) -> String {
    let mut section = String::new();

    section.push_str("## Season\n\n");
    section.push_str(&format!("- **Rounds:** {}\n", summary.rounds));
    section.push_str(&format!("- **Matches:** {}\n", summary.matches));
    section.push_str(&format!(
        "- **Goals:** {} ({:.2} per match)\n",
        summary.goals,
        summary.goals_per_match()
    ));
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        section.push_str(&format!(
            "- **Played:** {} to {}\n",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ));
    }
    section.push('\n');

    section
}

fn generate_standings_section(rows: &[RankingRow]) -> String {
    let mut section = String::new();

    section.push_str("## Standings\n\n");
    if rows.is_empty() {
        section.push_str("No matches played.\n");
        return section;
    }

    section.push_str("| # | Team | P | W | D | L | GF | GA | GD | Pts |\n");
    section.push_str("|---|------|---|---|---|---|----|----|----|-----|\n");
    for row in rows {
        section.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {:+} | {} |\n",
            row.rank,
            escape_markdown(&row.name),
            row.games_played,
            row.wins,
            row.draws,
            row.defeats,
            row.goals_for,
            row.goals_against,
            row.goal_diff,
            row.points
        ));
    }

    section
}

/// Escape pipes so a name cannot split a table cell.
fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}
