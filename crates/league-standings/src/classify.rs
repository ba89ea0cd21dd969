use league_types::{FormResult, Outcome, Score};

/// Classify a result from side A's point of view.
///
/// Total over all goal counts: exactly one of the three arms applies.
pub fn classify(goals_a: u32, goals_b: u32) -> Outcome {
    match goals_a.cmp(&goals_b) {
        std::cmp::Ordering::Greater => Outcome::HomeWin,
        std::cmp::Ordering::Less => Outcome::AwayWin,
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Classify a final score and return the `(home, away)` form symbols.
pub fn form_pair(score: Score) -> (FormResult, FormResult) {
    let outcome = classify(score.home_goals, score.away_goals);
    (outcome.home(), outcome.away())
}

/// Keep only the last `window` results, dropping the oldest.
pub(crate) fn truncate_form(form: &mut Vec<FormResult>, window: usize) {
    if form.len() > window {
        form.drain(..form.len() - window);
    }
}
