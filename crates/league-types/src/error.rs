use thiserror;

use crate::id::MatchId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{match_id} is marked played but has no {side} goal count")]
    MissingScore { match_id: MatchId, side: &'static str },
}
