use serde::{Deserialize, Serialize};

use crate::id::TeamId;
use crate::outcome::FormResult;

/// One row of a league table. Derived data, rebuilt wholesale on every run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub position: u32,
    /// Always equal to `position` until past tables are retained.
    pub previous_position: u32,
    pub team_name: TeamId,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    /// Recent results, most recent last, in fixture-list order.
    pub form: Vec<FormResult>,
}

impl StandingsEntry {
    /// A zeroed row for `team_name`, unranked.
    pub fn new(team_name: TeamId) -> Self {
        Self {
            position: 0,
            previous_position: 0,
            team_name,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    /// Rank change since the previous table.
    pub fn movement(&self) -> Movement {
        match self.position.cmp(&self.previous_position) {
            std::cmp::Ordering::Less => Movement::Up,
            std::cmp::Ordering::Greater => Movement::Down,
            std::cmp::Ordering::Equal => Movement::Unchanged,
        }
    }
}

/// Direction a team moved in the table. A lower position number is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    Up,
    Down,
    Unchanged,
}

/// Chronological recent results for a single team, most recent last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamForm {
    pub team_name: TeamId,
    pub form: Vec<FormResult>,
}

impl TeamForm {
    pub fn new(team_name: TeamId) -> Self {
        Self {
            team_name,
            form: Vec::new(),
        }
    }
}
