use serde::{Deserialize, Serialize};

use crate::fixture::Match;
use crate::id::LeagueId;
use crate::standings::{StandingsEntry, TeamForm};

/// Editable league metadata. Treated as opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueMeta {
    pub name: String,
    pub country: String,
    pub season: String,
}

impl LeagueMeta {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            season: season.into(),
        }
    }
}

/// Aggregate root: a league owns its fixtures exclusively.
///
/// `standings` and `team_form` are caches derived from `matches`. They are
/// replaced as a whole by the league processor and never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueData {
    pub id: LeagueId,
    pub name: String,
    pub country: String,
    pub season: String,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standings: Option<Vec<StandingsEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_form: Option<Vec<TeamForm>>,
}

impl LeagueData {
    /// A league with no fixtures and no derived data yet.
    pub fn new(id: LeagueId, meta: LeagueMeta) -> Self {
        Self {
            id,
            name: meta.name,
            country: meta.country,
            season: meta.season,
            matches: Vec::new(),
            standings: None,
            team_form: None,
        }
    }

    pub fn with_matches(mut self, matches: Vec<Match>) -> Self {
        self.matches = matches;
        self
    }

    pub fn meta(&self) -> LeagueMeta {
        LeagueMeta::new(&self.name, &self.country, &self.season)
    }

    /// Replaces name, country and season. Derived caches are left stale;
    /// the caller must re-process.
    pub fn with_meta(mut self, meta: LeagueMeta) -> Self {
        self.name = meta.name;
        self.country = meta.country;
        self.season = meta.season;
        self
    }
}
