use std::collections::BTreeSet;

use league_types::{Match, StandingsEntry, TeamForm, TeamId};

/// Returns the distinct rounds present in `matches`, ascending.
///
/// Scan complexity: O(n log n).
pub fn rounds(matches: &[Match]) -> Vec<u32> {
    matches
        .iter()
        .map(|m| m.round)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns the fixtures of `round` in input order.
///
/// Scan complexity: O(n).
pub fn matches_in_round(matches: &[Match], round: u32) -> Vec<&Match> {
    matches.iter().filter(|m| m.round == round).collect()
}

/// Counts fixtures with a final result.
pub fn played_count(matches: &[Match]) -> usize {
    matches.iter().filter(|m| m.is_played()).count()
}

/// Returns every fixture involving `team`, in input order.
///
/// Scan complexity: O(n).
pub fn team_fixtures<'a>(matches: &'a [Match], team: &TeamId) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.involves(team)).collect()
}

/// Looks up a team's row in a computed table.
pub fn team_entry<'a>(
    standings: &'a [StandingsEntry],
    team: &TeamId,
) -> Option<&'a StandingsEntry> {
    standings.iter().find(|e| &e.team_name == team)
}

/// The first-placed team, if the table is non-empty.
pub fn leader(standings: &[StandingsEntry]) -> Option<&StandingsEntry> {
    standings.iter().find(|e| e.position == 1)
}

/// Team forms sorted alphabetically by team name, for display.
///
/// Case is ignored first (`"alpha"` before `"Zeta"`); names equal up to case
/// fall back to code point order so the result is total.
pub fn forms_by_name(forms: &[TeamForm]) -> Vec<&TeamForm> {
    let mut sorted: Vec<&TeamForm> = forms.iter().collect();
    sorted.sort_by_cached_key(|f| (f.team_name.as_str().to_lowercase(), f.team_name.clone()));
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::aggregate::aggregate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 26).unwrap()
    }

    fn fixtures() -> Vec<Match> {
        vec![
            Match::new("5", 3, date(), "A", "B"),
            Match::new("1", 1, date(), "A", "C").with_score(2, 0),
            Match::new("2", 1, date(), "B", "D").with_score(1, 1),
            Match::new("3", 2, date(), "C", "B").with_score(0, 1),
        ]
    }

    #[test]
    fn rounds_are_distinct_and_ascending() {
        assert_eq!(rounds(&fixtures()), vec![1, 2, 3]);
        assert!(rounds(&[]).is_empty());
    }

    #[test]
    fn matches_in_round_keeps_input_order() {
        let matches = fixtures();
        let ids: Vec<&str> = matches_in_round(&matches, 1)
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(matches_in_round(&matches, 9).is_empty());
    }

    #[test]
    fn played_count_ignores_unplayed() {
        assert_eq!(played_count(&fixtures()), 3);
    }

    #[test]
    fn team_fixtures_includes_unplayed() {
        let matches = fixtures();
        let ids: Vec<&str> = team_fixtures(&matches, &TeamId::from("B"))
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["5", "2", "3"]);
    }

    #[test]
    fn leader_and_lookup_read_the_table() {
        let table = aggregate(&fixtures());

        assert_eq!(
            leader(&table).map(|e| e.team_name.as_str()),
            Some("B")
        );
        assert_eq!(
            team_entry(&table, &TeamId::from("C")).map(|e| e.points),
            Some(0)
        );
        assert!(team_entry(&table, &TeamId::from("Z")).is_none());
        assert!(leader(&[]).is_none());
    }

    #[test]
    fn forms_by_name_sorts_alphabetically() {
        let forms = vec![
            TeamForm::new(TeamId::from("Liverpool")),
            TeamForm::new(TeamId::from("Arsenal")),
            TeamForm::new(TeamId::from("Chelsea")),
        ];

        let names: Vec<&str> = forms_by_name(&forms)
            .into_iter()
            .map(|f| f.team_name.as_str())
            .collect();
        assert_eq!(names, vec!["Arsenal", "Chelsea", "Liverpool"]);
    }

    #[test]
    fn forms_by_name_ignores_case_before_code_point() {
        let forms = vec![
            TeamForm::new(TeamId::from("Zeta")),
            TeamForm::new(TeamId::from("alpha")),
            TeamForm::new(TeamId::from("beta")),
            TeamForm::new(TeamId::from("Alpha")),
        ];

        let names: Vec<&str> = forms_by_name(&forms)
            .into_iter()
            .map(|f| f.team_name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "alpha", "beta", "Zeta"]);
    }
}
