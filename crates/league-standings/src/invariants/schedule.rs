use league_types::Match;

use crate::error::FixtureViolation;

use super::FixtureState;

pub(crate) fn check(state: &FixtureState, m: &Match) -> Result<(), FixtureViolation> {
    if m.round == 0 {
        return Err(FixtureViolation::ZeroRound {
            match_id: m.id.clone(),
        });
    }

    // Home side is reported first when both teams are double booked.
    for team in [&m.home_team, &m.away_team] {
        if let Some(first) = state.bookings.get(&(team.clone(), m.round)) {
            return Err(FixtureViolation::TeamDoubleBooked {
                team: team.clone(),
                round: m.round,
                first_match: first.clone(),
                second_match: m.id.clone(),
            });
        }
    }

    Ok(())
}
