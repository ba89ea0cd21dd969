use league_standings::StandingsConfig;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    standings: StandingsConfig,
    validate_fixtures: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            standings: StandingsConfig::default(),
            validate_fixtures: true,
        }
    }
}

impl StoreConfig {
    pub fn standings(mut self, config: StandingsConfig) -> Self {
        self.standings = config;
        self
    }

    /// Reject fixture lists with violations on insert and replace.
    pub fn validate_fixtures(mut self, enabled: bool) -> Self {
        self.validate_fixtures = enabled;
        self
    }

    pub fn standings_config(&self) -> &StandingsConfig {
        &self.standings
    }

    pub fn validates_fixtures(&self) -> bool {
        self.validate_fixtures
    }
}
