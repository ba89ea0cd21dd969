use league_standings::FixtureViolation;
use league_types::LeagueId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    LeagueNotFound(LeagueId),
    #[error("{0} already exists")]
    DuplicateLeague(LeagueId),
    #[error("{} invalid fixture(s)", .0.len())]
    InvalidFixtures(Vec<FixtureViolation>),
    #[error("failed to decode leagues: {0}")]
    Json(#[from] serde_json::Error),
}
