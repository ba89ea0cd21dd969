use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::{MatchId, TeamId};

/// Final score of a played match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl Score {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
        }
    }
}

/// Whether a fixture has a finalized result.
///
/// Goal counts only exist on `Played`, so aggregation code cannot read a
/// score off an unplayed fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Unplayed,
    Played(Score),
}

/// A single fixture in a league. Immutable once created.
///
/// `round` defines chronological order; matches sharing a round are
/// simultaneous. `date` is carried for display only and never used for
/// ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord", into = "MatchRecord")]
pub struct Match {
    pub id: MatchId,
    pub round: u32,
    pub date: NaiveDate,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub status: MatchStatus,
}

impl Match {
    /// Creates an unplayed fixture.
    ///
    /// Use [`Self::with_score`] to record a result.
    pub fn new(
        id: impl Into<String>,
        round: u32,
        date: NaiveDate,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: MatchId::new(id),
            round,
            date,
            home_team: TeamId::new(home_team),
            away_team: TeamId::new(away_team),
            status: MatchStatus::Unplayed,
        }
    }

    /// Marks the fixture as played with the given score.
    pub fn with_score(mut self, home_goals: u32, away_goals: u32) -> Self {
        self.status = MatchStatus::Played(Score::new(home_goals, away_goals));
        self
    }

    /// The final score, or `None` if the match has not been played.
    pub fn score(&self) -> Option<Score> {
        match self.status {
            MatchStatus::Played(score) => Some(score),
            MatchStatus::Unplayed => None,
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self.status, MatchStatus::Played(_))
    }

    /// Whether `team` is either side of this fixture.
    pub fn involves(&self, team: &TeamId) -> bool {
        &self.home_team == team || &self.away_team == team
    }
}

/// Flat wire shape of a [`Match`], as exchanged with the front end.
///
/// Goal counts are optional on the wire; a record with `played: true`
/// must carry both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchId,
    pub round: u32,
    pub date: NaiveDate,
    pub home_team: TeamId,
    pub away_team: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<u32>,
    pub played: bool,
}

impl TryFrom<MatchRecord> for Match {
    type Error = DomainError;

    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        let status = if record.played {
            let home_goals = record.home_goals.ok_or_else(|| DomainError::MissingScore {
                match_id: record.id.clone(),
                side: "home",
            })?;
            let away_goals = record.away_goals.ok_or_else(|| DomainError::MissingScore {
                match_id: record.id.clone(),
                side: "away",
            })?;
            MatchStatus::Played(Score::new(home_goals, away_goals))
        } else {
            // Goal values on unplayed fixtures are placeholders; drop them.
            MatchStatus::Unplayed
        };

        Ok(Self {
            id: record.id,
            round: record.round,
            date: record.date,
            home_team: record.home_team,
            away_team: record.away_team,
            status,
        })
    }
}

impl From<Match> for MatchRecord {
    fn from(m: Match) -> Self {
        let score = m.score();
        Self {
            id: m.id,
            round: m.round,
            date: m.date,
            home_team: m.home_team,
            away_team: m.away_team,
            home_goals: score.map(|s| s.home_goals),
            away_goals: score.map(|s| s.away_goals),
            played: score.is_some(),
        }
    }
}
