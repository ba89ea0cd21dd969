use league_types::Match;

use crate::error::FixtureViolation;

use super::FixtureState;

/// Self-match is reported before duplicate id: a fixture with the same team
/// on both sides is wrong whatever its id.
pub(crate) fn check(state: &FixtureState, m: &Match) -> Result<(), FixtureViolation> {
    if m.home_team == m.away_team {
        return Err(FixtureViolation::SelfMatch {
            match_id: m.id.clone(),
            team: m.home_team.clone(),
        });
    }

    if state.seen_ids.contains(&m.id) {
        return Err(FixtureViolation::DuplicateMatchId {
            match_id: m.id.clone(),
        });
    }

    Ok(())
}
