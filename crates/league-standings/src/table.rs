use std::collections::HashMap;

use league_types::TeamId;

/// Per-call arena of team rows keyed by team name.
///
/// Rows are kept in first-appearance order so downstream output is
/// deterministic for a given input order. Built fresh on every aggregation
/// and consumed by [`TeamTable::into_rows`].
pub(crate) struct TeamTable<T> {
    index: HashMap<TeamId, usize>,
    rows: Vec<T>,
    make: fn(TeamId) -> T,
}

impl<T> TeamTable<T> {
    pub(crate) fn new(make: fn(TeamId) -> T) -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
            make,
        }
    }

    /// Row for `team`, created on first sight.
    pub(crate) fn row_mut(&mut self, team: &TeamId) -> &mut T {
        let idx = match self.index.get(team) {
            Some(&idx) => idx,
            None => {
                let idx = self.rows.len();
                self.rows.push((self.make)(team.clone()));
                self.index.insert(team.clone(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }

    pub(crate) fn into_rows(self) -> Vec<T> {
        self.rows
    }
}
