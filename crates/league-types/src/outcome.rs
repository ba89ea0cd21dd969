use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a played match from the home side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Form symbol for the home team.
    pub fn home(self) -> FormResult {
        match self {
            Self::HomeWin => FormResult::Win,
            Self::AwayWin => FormResult::Loss,
            Self::Draw => FormResult::Draw,
        }
    }

    /// Form symbol for the away team.
    pub fn away(self) -> FormResult {
        match self {
            Self::HomeWin => FormResult::Loss,
            Self::AwayWin => FormResult::Win,
            Self::Draw => FormResult::Draw,
        }
    }
}

/// One entry of a team's form sequence: `W`, `D` or `L` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    pub fn symbol(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }
}

impl fmt::Display for FormResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
