pub mod error;
pub mod fixture;
pub mod id;
pub mod league;
pub mod outcome;
pub mod standings;

pub use error::DomainError;
pub use fixture::{Match, MatchRecord, MatchStatus, Score};
pub use id::{LeagueId, MatchId, TeamId};
pub use league::{LeagueData, LeagueMeta};
pub use outcome::{FormResult, Outcome};
pub use standings::{Movement, StandingsEntry, TeamForm};
