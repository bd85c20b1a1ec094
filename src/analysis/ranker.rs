//! Turning team records into a ranked table.

use crate::analysis::aggregator::{TeamMap, TeamRecord};
use crate::analysis::rules::TableRules;
use crate::models::RankingRow;
use std::cmp::Ordering;

/// Build a table row for `record`. The rank is filled in by [`rank_teams`].
pub fn to_row(record: &TeamRecord, rules: &TableRules) -> RankingRow {
    RankingRow {
        rank: 0,
        name: record.name.clone(),
        games_played: record.games_played,
        wins: record.wins,
        draws: record.draws,
        defeats: record.defeats(),
        goals_for: record.goals_for,
        goals_against: record.goals_against,
        goal_diff: record.goal_difference(),
        points: record.points(rules),
    }
}

/// Order two rows by points, then goal difference, then goals scored.
///
/// `Less` means `a` ranks above `b`. Rows equal on all three compare as
/// `Equal`.
pub fn compare_rows(a: &RankingRow, b: &RankingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_diff.cmp(&a.goal_diff))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Sort all teams and number them 1..=N.
///
/// The sort is stable, so teams level on every criterion stay in the
/// order they first appeared in the season. Ranks are never shared.
pub fn rank_teams(teams: &TeamMap, rules: &TableRules) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = teams.iter().map(|r| to_row(r, rules)).collect();

    rows.sort_by(compare_rows);

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position + 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregator::aggregate_teams;
    use crate::models::{Match, Round, Team};

    fn team(key: &str) -> Team {
        Team {
            key: Some(key.to_string()),
            name: key.to_uppercase(),
            code: None,
        }
    }

    fn game(home: &str, away: &str, score1: u32, score2: u32) -> Match {
        Match {
            date: None,
            team1: team(home),
            team2: team(away),
            score1: Some(score1),
            score2: Some(score2),
        }
    }

    fn table(matches: Vec<Match>, rules: &TableRules) -> Vec<RankingRow> {
        let rounds = vec![Round {
            name: "Matchday 1".to_string(),
            matches,
        }];
        let teams = aggregate_teams(&rounds, rules).unwrap();
        rank_teams(&teams, rules)
    }

    fn names(rows: &[RankingRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn row(name: &str, points: u64, goal_diff: i64, goals_for: u64) -> RankingRow {
        RankingRow {
            rank: 0,
            name: name.to_string(),
            games_played: 0,
            wins: 0,
            draws: 0,
            defeats: 0,
            goals_for,
            goals_against: 0,
            goal_diff,
            points,
        }
    }

    #[test]
    fn test_compare_rows_priority() {
        assert_eq!(
            compare_rows(&row("a", 10, -5, 1), &row("b", 9, 20, 30)),
            Ordering::Less
        );
        assert_eq!(
            compare_rows(&row("a", 10, 2, 1), &row("b", 10, 3, 0)),
            Ordering::Greater
        );
        assert_eq!(
            compare_rows(&row("a", 10, 3, 7), &row("b", 10, 3, 6)),
            Ordering::Less
        );
        assert_eq!(
            compare_rows(&row("a", 10, 3, 7), &row("b", 10, 3, 7)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_win_and_draw_example() {
        let rules = TableRules::default();
        let rows = table(vec![game("a", "b", 3, 1), game("a", "b", 1, 1)], &rules);

        assert_eq!(
            rows[0],
            RankingRow {
                rank: 1,
                name: "A".to_string(),
                games_played: 2,
                wins: 1,
                draws: 1,
                defeats: 0,
                goals_for: 4,
                goals_against: 2,
                goal_diff: 2,
                points: 4,
            }
        );
        assert_eq!(
            rows[1],
            RankingRow {
                rank: 2,
                name: "B".to_string(),
                games_played: 2,
                wins: 0,
                draws: 1,
                defeats: 1,
                goals_for: 2,
                goals_against: 4,
                goal_diff: -2,
                points: 1,
            }
        );
    }

    #[test]
    fn test_full_tie_gets_distinct_ranks_in_appearance_order() {
        let rules = TableRules::default();
        // b and c both win 1-0 against a.
        let rows = table(vec![game("b", "a", 1, 0), game("c", "a", 1, 0)], &rules);

        assert_eq!(names(&rows), vec!["B", "C", "A"]);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        // Same results, c seen first.
        let rows = table(vec![game("c", "a", 1, 0), game("b", "a", 1, 0)], &rules);
        assert_eq!(names(&rows), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_goal_difference_then_goals_scored() {
        let rules = TableRules::default();
        let rows = table(
            vec![
                game("a", "x", 1, 0),
                game("b", "x", 3, 0),
                game("c", "x", 4, 1),
            ],
            &rules,
        );

        // b and c: 3 pts, +3; c scored more.
        assert_eq!(names(&rows), vec!["C", "B", "A", "X"]);
    }

    #[test]
    fn test_ranks_are_contiguous() {
        let rules = TableRules::default();
        let rows = table(
            vec![
                game("a", "b", 0, 0),
                game("c", "d", 0, 0),
                game("e", "f", 2, 2),
                game("a", "c", 1, 3),
            ],
            &rules,
        );

        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn test_points_follow_rules() {
        let rules = TableRules::two_points_for_a_win();
        let rows = table(vec![game("a", "b", 2, 0), game("a", "b", 0, 0)], &rules);

        for row in &rows {
            assert_eq!(row.points, u64::from(row.wins) * 2 + u64::from(row.draws));
        }
        assert_eq!(rows[0].points, 3);
    }

    #[test]
    fn test_empty_map() {
        let rows = rank_teams(&TeamMap::new(), &TableRules::default());
        assert!(rows.is_empty());
    }
}
