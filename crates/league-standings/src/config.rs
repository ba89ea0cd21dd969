/// League points awarded per result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRule {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Tunables for table and form computation.
///
/// The defaults (3/1/0 points, five-match form window) are what
/// [`crate::process_league`] uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsConfig {
    form_window: usize,
    points: PointsRule,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            form_window: 5,
            points: PointsRule::default(),
        }
    }
}

impl StandingsConfig {
    pub fn form_window(mut self, len: usize) -> Self {
        self.form_window = len;
        self
    }

    pub fn points(mut self, points: PointsRule) -> Self {
        self.points = points;
        self
    }

    pub fn window(&self) -> usize {
        self.form_window
    }

    pub fn points_rule(&self) -> PointsRule {
        self.points
    }
}
