//! Fixture list validation.
//!
//! Provides two modes:
//! - **Incremental** ([`FixtureState::check_append`]): O(1) per match via auxiliary state.
//!   Used when a caller builds a fixture list one match at a time.
//! - **Batch** ([`validate_fixtures`]): O(n) scan that collects every violation.
//!   Used before replacing a league's fixtures wholesale.
//!
//! Checks are grouped into two sub-modules:
//! - [`identity`]: unique match ids, distinct home and away teams.
//! - [`schedule`]: 1-based rounds, at most one fixture per team per round.
//!
//! Each sub-module exposes `check(&FixtureState, &Match) -> Result<(), FixtureViolation>`
//! and is read-only over state; all mutation happens in [`FixtureState::apply_match`].

mod identity;
mod schedule;

use crate::error::FixtureViolation;
use league_types::{Match, MatchId, TeamId};
use std::collections::{HashMap, HashSet};

/// Accumulated state for incremental fixture checking.
#[derive(Clone, Debug, Default)]
pub struct FixtureState {
    /// Ids of every fixture ingested so far.
    pub(crate) seen_ids: HashSet<MatchId>,

    /// First fixture each `(team, round)` pair was booked in.
    pub(crate) bookings: HashMap<(TeamId, u32), MatchId>,
}

impl FixtureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and ingest a single fixture.
    ///
    /// On error the fixture is not ingested and state is unchanged.
    pub fn check_append(&mut self, m: &Match) -> Result<(), FixtureViolation> {
        identity::check(self, m)?;
        schedule::check(self, m)?;
        self.apply_match(m);
        Ok(())
    }

    /// Number of distinct fixture ids ingested.
    pub fn len(&self) -> usize {
        self.seen_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_ids.is_empty()
    }

    fn collect_violations(&self, m: &Match, violations: &mut Vec<FixtureViolation>) {
        if let Err(v) = identity::check(self, m) {
            violations.push(v);
        }
        if let Err(v) = schedule::check(self, m) {
            violations.push(v);
        }
    }

    fn apply_match(&mut self, m: &Match) {
        self.seen_ids.insert(m.id.clone());
        for team in [&m.home_team, &m.away_team] {
            self.bookings
                .entry((team.clone(), m.round))
                .or_insert_with(|| m.id.clone());
        }
    }
}

/// Batch-validate a fixture list, returning every violation found.
///
/// State is applied after every fixture regardless of errors so later
/// fixtures are checked against everything before them.
pub fn validate_fixtures(matches: &[Match]) -> Vec<FixtureViolation> {
    let mut state = FixtureState::new();
    let mut violations = Vec::new();

    for m in matches {
        state.collect_violations(m, &mut violations);
        state.apply_match(m);
    }

    violations
}
