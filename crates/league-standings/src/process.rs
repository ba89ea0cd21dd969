use league_types::LeagueData;
use tracing::debug;

use crate::aggregate::aggregate_with;
use crate::config::StandingsConfig;
use crate::form::track_form_with;

/// Recompute a league's derived table and form with default rules.
///
/// Must be re-run after any change to `matches`, `name`, `country` or
/// `season`; nothing tracks staleness. See [`LeagueProcessor::process`].
pub fn process_league(league: LeagueData) -> LeagueData {
    LeagueProcessor::default().process(league)
}

/// Attaches standings and team form to leagues under a fixed config.
#[derive(Debug, Clone, Default)]
pub struct LeagueProcessor {
    config: StandingsConfig,
}

impl LeagueProcessor {
    pub fn new(config: StandingsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    /// Returns `league` with `standings` and `team_form` replaced wholesale.
    ///
    /// Every other field is passed through untouched. Any previously attached
    /// caches are ignored, so re-processing is idempotent.
    pub fn process(&self, league: LeagueData) -> LeagueData {
        let standings = aggregate_with(&league.matches, &self.config);
        let team_form = track_form_with(&league.matches, &self.config);

        debug!(
            league_id = %league.id,
            matches = league.matches.len(),
            teams = standings.len(),
            "processed league"
        );

        LeagueData {
            standings: Some(standings),
            team_form: Some(team_form),
            ..league
        }
    }
}
