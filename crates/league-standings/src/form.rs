use league_types::{Match, TeamForm};

use crate::classify::{form_pair, truncate_form};
use crate::config::StandingsConfig;
use crate::table::TeamTable;

/// Chronological form for every team with a played match, default window.
///
/// See [`track_form_with`].
pub fn track_form(matches: &[Match]) -> Vec<TeamForm> {
    track_form_with(matches, &StandingsConfig::default())
}

/// Chronological form for every team with a played match.
///
/// Unlike the table's `form` column, results here are appended after a
/// stable sort by `round`, so the sequence is chronological regardless of
/// input order. Matches sharing a round keep their input order.
///
/// Output is in first-appearance order over `matches`; callers wanting an
/// alphabetical view use [`crate::queries::forms_by_name`].
pub fn track_form_with(matches: &[Match], config: &StandingsConfig) -> Vec<TeamForm> {
    let mut table = TeamTable::new(TeamForm::new);

    for m in matches.iter().filter(|m| m.is_played()) {
        table.row_mut(&m.home_team);
        table.row_mut(&m.away_team);
    }

    let mut by_round: Vec<&Match> = matches.iter().collect();
    by_round.sort_by_key(|m| m.round);

    for m in by_round {
        let Some(score) = m.score() else {
            continue;
        };
        let (home_result, away_result) = form_pair(score);
        table.row_mut(&m.home_team).form.push(home_result);
        table.row_mut(&m.away_team).form.push(away_result);
    }

    let mut forms = table.into_rows();
    for team in &mut forms {
        truncate_form(&mut team.form, config.window());
    }
    forms
}
