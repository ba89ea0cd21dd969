//! League table and form computation.
//!
//! The pipeline is `matches -> (standings, team form)`: pure, synchronous
//! functions over values, with no shared state. [`process_league`] composes
//! the two and attaches the results to a [`league_types::LeagueData`].

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod form;
pub mod invariants;
pub mod process;
pub mod queries;
mod table;

pub use aggregate::{aggregate, aggregate_with, rank_order};
pub use classify::{classify, form_pair};
pub use config::{PointsRule, StandingsConfig};
pub use error::FixtureViolation;
pub use form::{track_form, track_form_with};
pub use invariants::{FixtureState, validate_fixtures};
pub use process::{LeagueProcessor, process_league};
