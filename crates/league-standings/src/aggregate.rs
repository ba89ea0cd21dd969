use std::cmp::Ordering;

use league_types::{FormResult, Match, MatchStatus, StandingsEntry};

use crate::classify::{form_pair, truncate_form};
use crate::config::{PointsRule, StandingsConfig};
use crate::table::TeamTable;

/// Fold every played match into a ranked league table with default rules.
///
/// See [`aggregate_with`].
pub fn aggregate(matches: &[Match]) -> Vec<StandingsEntry> {
    aggregate_with(matches, &StandingsConfig::default())
}

/// Fold every played match into a ranked league table.
///
/// Only teams with at least one played match get a row. Each row's `form`
/// is appended in the order matches appear in `matches`, not by round, and
/// is then cut to the last `config.window()` results. Rows are ranked by
/// [`rank_order`] with a stable sort, so fully tied teams keep their
/// first-appearance order.
///
/// Returns an empty table for an empty or all-unplayed fixture list.
///
/// Complexity: O(n) over `matches.len()` plus O(t log t) over teams.
pub fn aggregate_with(matches: &[Match], config: &StandingsConfig) -> Vec<StandingsEntry> {
    let points = config.points_rule();
    let mut table = TeamTable::new(StandingsEntry::new);

    for m in matches {
        let MatchStatus::Played(score) = m.status else {
            continue;
        };
        let (home_result, away_result) = form_pair(score);

        record(
            table.row_mut(&m.home_team),
            score.home_goals,
            score.away_goals,
            home_result,
            points,
        );
        record(
            table.row_mut(&m.away_team),
            score.away_goals,
            score.home_goals,
            away_result,
            points,
        );
    }

    let mut rows = table.into_rows();
    for row in &mut rows {
        row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
        truncate_form(&mut row.form, config.window());
    }

    rows.sort_by(rank_order);

    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        row.previous_position = row.position;
    }

    rows
}

/// Table order: points, then goal difference, then goals scored, all
/// descending. Anything beyond that compares equal.
pub fn rank_order(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

fn record(
    row: &mut StandingsEntry,
    scored: u32,
    conceded: u32,
    result: FormResult,
    points: PointsRule,
) {
    // Counters saturate: decoded goal counts can be any u32.
    row.matches_played = row.matches_played.saturating_add(1);
    row.goals_for = row.goals_for.saturating_add(scored);
    row.goals_against = row.goals_against.saturating_add(conceded);
    let awarded = match result {
        FormResult::Win => {
            row.wins = row.wins.saturating_add(1);
            points.win
        }
        FormResult::Draw => {
            row.draws = row.draws.saturating_add(1);
            points.draw
        }
        FormResult::Loss => {
            row.losses = row.losses.saturating_add(1);
            points.loss
        }
    };
    row.points = row.points.saturating_add(awarded);
    row.form.push(result);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use league_types::TeamId;
    use similar_asserts::assert_eq;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 12).unwrap()
    }

    fn played(id: &str, round: u32, home: &str, away: &str, hg: u32, ag: u32) -> Match {
        Match::new(id, round, date(), home, away).with_score(hg, ag)
    }

    fn unplayed(id: &str, round: u32, home: &str, away: &str) -> Match {
        Match::new(id, round, date(), home, away)
    }

    fn row<'a>(table: &'a [StandingsEntry], team: &str) -> &'a StandingsEntry {
        table
            .iter()
            .find(|e| e.team_name.as_str() == team)
            .unwrap_or_else(|| panic!("{team} missing from table"))
    }

    #[test]
    fn empty_and_unplayed_inputs_yield_empty_table() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[unplayed("1", 1, "A", "B"), unplayed("2", 1, "C", "D")]).is_empty());
    }

    #[test]
    fn counters_follow_each_side() {
        let table = aggregate(&[played("1", 1, "A", "B", 3, 1)]);

        let a = row(&table, "A");
        assert_eq!(a.matches_played, 1);
        assert_eq!((a.wins, a.draws, a.losses), (1, 0, 0));
        assert_eq!((a.goals_for, a.goals_against), (3, 1));
        assert_eq!(a.goal_difference, 2);
        assert_eq!(a.points, 3);
        assert_eq!(a.form, vec![FormResult::Win]);

        let b = row(&table, "B");
        assert_eq!((b.wins, b.draws, b.losses), (0, 0, 1));
        assert_eq!(b.goal_difference, -2);
        assert_eq!(b.points, 0);
        assert_eq!(b.form, vec![FormResult::Loss]);
    }

    #[test]
    fn team_only_in_unplayed_fixtures_is_excluded() {
        let table = aggregate(&[played("1", 1, "A", "B", 1, 1), unplayed("2", 2, "A", "Ghost")]);

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|e| e.team_name != TeamId::from("Ghost")));
        assert_eq!(row(&table, "A").matches_played, 1);
    }

    #[test]
    fn ties_break_on_goal_difference_then_goals_for() {
        // A and B: 3 pts, GD +1. A scored more. C: 3 pts, GD +2.
        let table = aggregate(&[
            played("1", 1, "B", "X", 1, 0),
            played("2", 1, "A", "Y", 3, 2),
            played("3", 1, "C", "Z", 2, 0),
        ]);

        let order: Vec<&str> = table.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(order[..3].to_vec(), vec!["C", "A", "B"]);
        assert_eq!(table[0].position, 1);
        assert_eq!(table[2].position, 3);
    }

    #[test]
    fn full_ties_keep_first_appearance_order() {
        let table = aggregate(&[
            played("1", 1, "D", "C", 1, 1),
            played("2", 1, "B", "A", 1, 1),
        ]);

        let order: Vec<&str> = table.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(order, vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn previous_position_mirrors_position() {
        let table = aggregate(&[played("1", 1, "A", "B", 0, 2)]);
        for entry in &table {
            assert_eq!(entry.previous_position, entry.position);
        }
    }

    #[test]
    fn form_follows_input_order_not_round_order() {
        // Listed newest round first.
        let table = aggregate(&[
            played("3", 3, "A", "B", 0, 1),
            played("2", 2, "A", "C", 1, 1),
            played("1", 1, "A", "D", 2, 0),
        ]);

        assert_eq!(
            row(&table, "A").form,
            vec![FormResult::Loss, FormResult::Draw, FormResult::Win]
        );
    }

    #[test]
    fn form_is_cut_to_window() {
        let matches: Vec<Match> = (1..=7)
            .map(|r| played(&r.to_string(), r, "A", "B", r % 2, 0))
            .collect();

        let table = aggregate(&matches);
        let a = row(&table, "A");
        assert_eq!(a.matches_played, 7);
        assert_eq!(a.form.len(), 5);
        // Rounds 3..=7: odd rounds are wins.
        assert_eq!(
            a.form,
            vec![
                FormResult::Win,
                FormResult::Draw,
                FormResult::Win,
                FormResult::Draw,
                FormResult::Win
            ]
        );
    }

    #[test]
    fn custom_points_rule_is_applied() {
        let config = StandingsConfig::default()
            .points(PointsRule {
                win: 2,
                draw: 1,
                loss: 0,
            })
            .form_window(2);
        let table = aggregate_with(
            &[
                played("1", 1, "A", "B", 1, 0),
                played("2", 2, "A", "B", 0, 0),
                played("3", 3, "A", "B", 2, 0),
            ],
            &config,
        );

        let a = row(&table, "A");
        assert_eq!(a.points, 5);
        assert_eq!(a.form, vec![FormResult::Draw, FormResult::Win]);
    }

    #[test]
    fn self_match_is_aggregated_as_observed() {
        // Not rejected here; the fixture validator reports it.
        let table = aggregate(&[played("1", 1, "A", "A", 2, 1)]);

        assert_eq!(table.len(), 1);
        let a = &table[0];
        assert_eq!(a.matches_played, 2);
        assert_eq!((a.wins, a.losses), (1, 1));
        assert_eq!(a.goal_difference, 0);
        assert_eq!(a.form, vec![FormResult::Win, FormResult::Loss]);
    }

    #[test]
    fn huge_goal_counts_saturate_instead_of_overflowing() {
        let table = aggregate(&[
            played("1", 1, "A", "B", u32::MAX, 0),
            played("2", 2, "A", "C", 1, 0),
        ]);

        let a = row(&table, "A");
        assert_eq!(a.goals_for, u32::MAX);
        assert_eq!(a.goals_against, 0);
        assert_eq!(a.goal_difference, i64::from(u32::MAX));
        assert_eq!(a.points, 6);
        assert_eq!(a.position, 1);
        assert_eq!(row(&table, "B").goals_against, u32::MAX);
    }

    #[test]
    fn team_names_are_case_sensitive() {
        let table = aggregate(&[
            played("1", 1, "Arsenal", "B", 1, 0),
            played("2", 2, "arsenal", "B", 1, 0),
        ]);
        assert_eq!(table.len(), 3);
    }
}
