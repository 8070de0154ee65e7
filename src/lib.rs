//! League Core - points table computation for a cricket league.
//!
//! Derives league standings from raw match results: wins, losses and points
//! per team, with net run rate (NRR) computed from innings runs and overs as
//! the tie-breaker. Everything is pure computation over rows the caller has
//! already fetched; Python bindings are available behind the `python` feature.
//!
//! ```
//! use league_core::{
//!     calculate_standings, Fixture, InningsEntry, MatchResult, ScoreCard, StandingsConfig, Team,
//! };
//!
//! let teams = vec![Team::new("A", "Alpha"), Team::new("B", "Beta")];
//! let fixtures = vec![Fixture::new("f1", "A", "B")];
//! let results = vec![MatchResult::new(
//!     "f1",
//!     Some("A"),
//!     ScoreCard::flat(InningsEntry::new(150, 4, "20.0"), InningsEntry::new(140, 8, "20.0")),
//! )];
//!
//! let table = calculate_standings(&teams, &fixtures, &results, &StandingsConfig::default());
//! assert_eq!(table[0].team_name, "Alpha");
//! assert_eq!(table[0].nrr, 0.5);
//! ```

pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod fixture;
pub mod match_result;
pub mod nrr;
pub mod overs;
pub mod scorecard;
pub mod source;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use config::{StageFilter, StandingsConfig};
pub use constants::{
    BALLS_PER_OVER, GROUP_STAGE, NRR_DECIMALS, POINTS_FOR_LOSS, POINTS_FOR_NO_RESULT,
    POINTS_FOR_WIN,
};
pub use countdown::Countdown;
pub use error::{LeagueError, Result};
pub use fixture::Fixture;
pub use match_result::{Innings, InningsEntry, InningsPair, MatchResult, ScoreCard};
pub use nrr::{net_run_rate, round_to, run_rate};
pub use overs::{to_overs_decimal, OversValue};
pub use scorecard::{bowling_economy, BowlingLine};
pub use source::{stage_tables_from_source, standings_from_source, LeagueSource, SeasonSnapshot};
pub use standings::{calculate_stage_tables, calculate_standings, StageTable, StandingsRow};
pub use team::Team;
