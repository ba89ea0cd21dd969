use league_types::{MatchId, TeamId};

/// Describes a single problem in a league's fixture list.
///
/// The table and form computations accept any fixture list; these are
/// reported by the validator so callers can refuse bad input at the
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureViolation {
    /// A team is listed as both home and away side.
    SelfMatch { match_id: MatchId, team: TeamId },
    /// Two fixtures share an id.
    DuplicateMatchId { match_id: MatchId },
    /// Rounds are 1-based.
    ZeroRound { match_id: MatchId },
    /// A team appears in more than one fixture of the same round.
    TeamDoubleBooked {
        team: TeamId,
        round: u32,
        first_match: MatchId,
        second_match: MatchId,
    },
}

impl std::fmt::Display for FixtureViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfMatch { match_id, team } => {
                write!(f, "{match_id}: {team} cannot play itself")
            }
            Self::DuplicateMatchId { match_id } => write!(f, "{match_id} appears more than once"),
            Self::ZeroRound { match_id } => write!(f, "{match_id} has round 0, rounds start at 1"),
            Self::TeamDoubleBooked {
                team,
                round,
                first_match,
                second_match,
            } => write!(
                f,
                "{team} is scheduled twice in round {round} ({first_match} and {second_match})"
            ),
        }
    }
}
