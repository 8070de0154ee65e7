//! Points table computation.
//!
//! Folds completed match results into per-team counters, derives net run
//! rate, and ranks teams by points with NRR as the tie-breaker.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::StandingsConfig;
use crate::fixture::Fixture;
use crate::match_result::{Innings, InningsPair, MatchResult};
use crate::nrr::net_run_rate;
use crate::team::Team;

/// One team's line in the points table.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: String,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
    pub runs_scored: u32,
    /// Decimal overs batted
    pub overs_faced: f64,
    pub runs_conceded: u32,
    /// Decimal overs bowled
    pub overs_bowled: f64,
    pub nrr: f64,
}

impl StandingsRow {
    /// An all-zero row for a team that has not played yet.
    pub fn new(team: &Team) -> Self {
        StandingsRow {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            ..Default::default()
        }
    }

    fn add_innings(&mut self, own: Option<&Innings>, opponent: Option<&Innings>) {
        self.played += 1;
        if let Some(own) = own {
            self.runs_scored = self.runs_scored.saturating_add(own.runs);
            self.overs_faced += own.overs;
        }
        if let Some(opponent) = opponent {
            self.runs_conceded = self.runs_conceded.saturating_add(opponent.runs);
            self.overs_bowled += opponent.overs;
        }
    }

    // Saturates like the run totals above
    fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    fn update_nrr(&mut self) {
        self.nrr = net_run_rate(
            f64::from(self.runs_scored),
            self.overs_faced,
            f64::from(self.runs_conceded),
            self.overs_bowled,
        );
    }
}

/// A points table for a single competition stage.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageTable {
    pub stage: String,
    pub rows: Vec<StandingsRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    TeamA,
    TeamB,
    Tied,
    NoResult,
}

impl Outcome {
    fn decide(result: &MatchResult, team_a: &str, team_b: &str, innings: &InningsPair) -> Self {
        match result.winner.as_deref() {
            Some(w) if w == team_a => Outcome::TeamA,
            Some(w) if w == team_b => Outcome::TeamB,
            winner => {
                if let Some(w) = winner {
                    warn!(
                        match_id = %result.match_id,
                        winner = w,
                        "winner is neither side, scoring as no result"
                    );
                }
                if innings.is_tie() {
                    Outcome::Tied
                } else {
                    Outcome::NoResult
                }
            }
        }
    }
}

/// Calculate the ranked points table.
///
/// Every team in `teams` gets exactly one row, even without any matches.
/// Results are skipped (never partially applied) when their fixture is
/// unknown or not admitted by `config.stage_filter`, or when either fixture
/// team is missing from `teams`.
///
/// Rows are ordered by points, then net run rate, both descending. Exact ties
/// keep the order of `teams`. A row's rank is its 1-based position.
///
/// # Arguments
/// * `teams` - All teams in the league
/// * `fixtures` - Scheduled fixtures
/// * `results` - Results of completed fixtures
/// * `config` - Point rules and stage filter
pub fn calculate_standings(
    teams: &[Team],
    fixtures: &[Fixture],
    results: &[MatchResult],
    config: &StandingsConfig,
) -> Vec<StandingsRow> {
    let mut table: Vec<StandingsRow> = teams.iter().map(StandingsRow::new).collect();

    let mut team_index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (i, team) in teams.iter().enumerate() {
        team_index.entry(team.id.as_str()).or_insert(i);
    }

    let mut fixture_index: HashMap<&str, &Fixture> = HashMap::with_capacity(fixtures.len());
    for fixture in fixtures {
        if config.stage_filter.admits(fixture.stage.as_deref()) {
            fixture_index.entry(fixture.id.as_str()).or_insert(fixture);
        }
    }

    let mut counted = 0usize;
    for result in results {
        let Some(fixture) = fixture_index.get(result.match_id.as_str()) else {
            debug!(match_id = %result.match_id, "no counted fixture for result, skipping");
            continue;
        };

        let Some((team_a, team_b)) = fixture.teams() else {
            debug!(match_id = %result.match_id, "fixture has an empty team slot, skipping");
            continue;
        };

        let (a, b) = match (team_index.get(team_a), team_index.get(team_b)) {
            (Some(&a), Some(&b)) if a != b => (a, b),
            _ => {
                debug!(
                    match_id = %result.match_id,
                    team_a,
                    team_b,
                    "fixture teams not in table, skipping"
                );
                continue;
            }
        };

        let innings = result.innings();
        table[a].add_innings(innings.team_a.as_ref(), innings.team_b.as_ref());
        table[b].add_innings(innings.team_b.as_ref(), innings.team_a.as_ref());

        match Outcome::decide(result, team_a, team_b, &innings) {
            Outcome::TeamA => {
                table[a].won += 1;
                table[a].award(config.points_for_win);
                table[b].lost += 1;
                table[b].award(config.points_for_loss);
            }
            Outcome::TeamB => {
                table[b].won += 1;
                table[b].award(config.points_for_win);
                table[a].lost += 1;
                table[a].award(config.points_for_loss);
            }
            Outcome::Tied => {
                for i in [a, b] {
                    table[i].tied += 1;
                    table[i].award(config.points_for_no_result);
                }
            }
            Outcome::NoResult => {
                for i in [a, b] {
                    table[i].no_result += 1;
                    table[i].award(config.points_for_no_result);
                }
            }
        }
        counted += 1;
    }

    for row in &mut table {
        row.update_nrr();
    }

    // sort_by is stable, so exact ties stay in team order
    table.sort_by(|x, y| y.points.cmp(&x.points).then_with(|| y.nrr.total_cmp(&x.nrr)));

    debug!(
        teams = table.len(),
        counted,
        skipped = results.len() - counted,
        "points table computed"
    );
    table
}

/// Calculate one points table per stage.
///
/// Stages are taken from the fixtures' stage tags in order of first
/// appearance; untagged fixtures are not tabled. Each table holds the teams
/// that appear in that stage's fixtures and uses the point rules of `config`.
/// Tables are computed in parallel.
pub fn calculate_stage_tables(
    teams: &[Team],
    fixtures: &[Fixture],
    results: &[MatchResult],
    config: &StandingsConfig,
) -> Vec<StageTable> {
    let mut stages: Vec<&str> = Vec::new();
    for stage in fixtures.iter().filter_map(|f| f.stage.as_deref()) {
        if !stages.contains(&stage) {
            stages.push(stage);
        }
    }

    stages
        .par_iter()
        .map(|&stage| {
            let stage_teams = stage_teams(teams, fixtures, stage);
            let config = config.for_stage(stage);
            let rows = calculate_standings(&stage_teams, fixtures, results, &config);
            StageTable {
                stage: stage.to_string(),
                rows,
            }
        })
        .collect()
}

fn stage_teams(teams: &[Team], fixtures: &[Fixture], stage: &str) -> Vec<Team> {
    teams
        .iter()
        .filter(|team| {
            fixtures.iter().any(|f| {
                f.stage.as_deref() == Some(stage)
                    && (f.team_a.as_deref() == Some(team.id.as_str())
                        || f.team_b.as_deref() == Some(team.id.as_str()))
            })
        })
        .cloned()
        .collect()
}
