use std::collections::HashSet;

use league_standings::{FixtureViolation, LeagueProcessor, validate_fixtures};
use league_types::{LeagueData, LeagueId, LeagueMeta, Match};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// In-memory collection of leagues, kept in insertion order.
///
/// Every mutation builds a complete new [`LeagueData`], re-runs the
/// processor on it and only then swaps it into place, so readers never see
/// a league whose derived table disagrees with its fixtures.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    config: StoreConfig,
    processor: LeagueProcessor,
    leagues: Vec<LeagueData>,
}

impl Default for LeagueStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl LeagueStore {
    pub fn new(config: StoreConfig) -> Self {
        let processor = LeagueProcessor::new(config.standings_config().clone());
        Self {
            config,
            processor,
            leagues: Vec::new(),
        }
    }

    /// Creates an empty league with a fresh id.
    pub fn create(&mut self, meta: LeagueMeta) -> LeagueId {
        let id = LeagueId::new(Uuid::new_v4().to_string());
        let league = self.processor.process(LeagueData::new(id.clone(), meta));
        info!(league_id = %id, name = %league.name, "league created");
        self.leagues.push(league);
        id
    }

    /// Adds a fully formed league, e.g. from initial data.
    ///
    /// Any derived data on `league` is discarded and recomputed.
    pub fn insert(&mut self, league: LeagueData) -> Result<LeagueId, StoreError> {
        if self.position(&league.id).is_some() {
            return Err(StoreError::DuplicateLeague(league.id));
        }
        self.check_fixtures(&league.id, &league.matches)?;

        let league = self.processor.process(league);
        let id = league.id.clone();
        info!(league_id = %id, matches = league.matches.len(), "league inserted");
        self.leagues.push(league);
        Ok(id)
    }

    /// Replaces name, country and season, then re-processes.
    pub fn update_meta(
        &mut self,
        id: &LeagueId,
        meta: LeagueMeta,
    ) -> Result<&LeagueData, StoreError> {
        let idx = self.require(id)?;
        let updated = self.processor.process(self.leagues[idx].clone().with_meta(meta));
        info!(league_id = %id, name = %updated.name, "league updated");
        self.leagues[idx] = updated;
        Ok(&self.leagues[idx])
    }

    /// Replaces a league's entire fixture list, then re-processes.
    pub fn replace_matches(
        &mut self,
        id: &LeagueId,
        matches: Vec<Match>,
    ) -> Result<&LeagueData, StoreError> {
        let idx = self.require(id)?;
        self.check_fixtures(id, &matches)?;

        let updated = self
            .processor
            .process(self.leagues[idx].clone().with_matches(matches));
        info!(league_id = %id, matches = updated.matches.len(), "fixtures replaced");
        self.leagues[idx] = updated;
        Ok(&self.leagues[idx])
    }

    pub fn delete(&mut self, id: &LeagueId) -> Result<LeagueData, StoreError> {
        let idx = self.require(id)?;
        info!(league_id = %id, "league deleted");
        Ok(self.leagues.remove(idx))
    }

    pub fn get(&self, id: &LeagueId) -> Option<&LeagueData> {
        self.position(id).map(|idx| &self.leagues[idx])
    }

    pub fn leagues(&self) -> &[LeagueData] {
        &self.leagues
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    /// Leagues whose name, country or season contains `term`, ignoring case.
    ///
    /// An empty term matches every league.
    pub fn search(&self, term: &str) -> Vec<&LeagueData> {
        let needle = term.to_lowercase();
        self.leagues
            .iter()
            .filter(|l| {
                [&l.name, &l.country, &l.season]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Loads a JSON array of leagues in the front end's wire shape.
    ///
    /// All-or-nothing: if any league is a duplicate or has invalid fixtures,
    /// nothing is added. Returns the number of leagues loaded.
    pub fn load_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let incoming: Vec<LeagueData> = serde_json::from_str(json)?;

        let mut ids: HashSet<&LeagueId> = self.leagues.iter().map(|l| &l.id).collect();
        for league in &incoming {
            if !ids.insert(&league.id) {
                return Err(StoreError::DuplicateLeague(league.id.clone()));
            }
            self.check_fixtures(&league.id, &league.matches)?;
        }

        let count = incoming.len();
        let processed: Vec<LeagueData> = incoming
            .into_iter()
            .map(|league| self.processor.process(league))
            .collect();
        self.leagues.extend(processed);
        info!(count, total = self.leagues.len(), "leagues loaded");
        Ok(count)
    }

    fn position(&self, id: &LeagueId) -> Option<usize> {
        self.leagues.iter().position(|l| &l.id == id)
    }

    fn require(&self, id: &LeagueId) -> Result<usize, StoreError> {
        self.position(id)
            .ok_or_else(|| StoreError::LeagueNotFound(id.clone()))
    }

    fn check_fixtures(&self, id: &LeagueId, matches: &[Match]) -> Result<(), StoreError> {
        if !self.config.validates_fixtures() {
            return Ok(());
        }
        let violations: Vec<FixtureViolation> = validate_fixtures(matches);
        if violations.is_empty() {
            return Ok(());
        }
        for v in &violations {
            warn!(league_id = %id, violation = %v, "rejected fixture");
        }
        Err(StoreError::InvalidFixtures(violations))
    }
}
