//! PyO3 bindings, built with the `python` feature.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::{StageFilter, StandingsConfig};
use crate::constants::{POINTS_FOR_LOSS, POINTS_FOR_NO_RESULT, POINTS_FOR_WIN};
use crate::error::LeagueError;
use crate::nrr::net_run_rate;
use crate::overs::{to_overs_decimal, OversValue};
use crate::scorecard::bowling_economy;
use crate::source::{stage_tables_from_source, standings_from_source, SeasonSnapshot};
use crate::standings::{StageTable, StandingsRow};

impl From<LeagueError> for PyErr {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

#[pymethods]
impl StandingsRow {
    fn __repr__(&self) -> String {
        format!(
            "StandingsRow({:?}, played={}, won={}, lost={}, points={}, nrr={:.3})",
            self.team_name, self.played, self.won, self.lost, self.points, self.nrr
        )
    }
}

/// Convert overs in `overs.balls` notation (number, string or None) to decimal overs.
#[pyfunction]
#[pyo3(signature = (value = None))]
fn py_to_overs_decimal(value: Option<OversValue>) -> f64 {
    to_overs_decimal(value.as_ref())
}

/// Net run rate from aggregate runs and decimal overs.
#[pyfunction]
fn py_net_run_rate(
    runs_scored: f64,
    overs_faced: f64,
    runs_conceded: f64,
    overs_bowled: f64,
) -> f64 {
    net_run_rate(runs_scored, overs_faced, runs_conceded, overs_bowled)
}

/// Bowling economy, or None if no overs were bowled.
#[pyfunction]
#[pyo3(signature = (runs_conceded, overs = None))]
fn py_bowling_economy(runs_conceded: u32, overs: Option<OversValue>) -> Option<f64> {
    bowling_economy(runs_conceded, overs.as_ref())
}

fn config_from_args(
    stage: Option<String>,
    points_for_win: u32,
    points_for_loss: u32,
    points_for_no_result: u32,
) -> StandingsConfig {
    StandingsConfig {
        stage_filter: stage.map_or(StageFilter::All, StageFilter::Only),
        points_for_win,
        points_for_loss,
        points_for_no_result,
    }
}

/// Points table from JSON arrays of team, fixture and result rows.
///
/// Pass `stage="Group"` to count only fixtures of that stage.
#[pyfunction]
#[pyo3(signature = (
    teams_json,
    fixtures_json,
    results_json,
    stage = None,
    points_for_win = POINTS_FOR_WIN,
    points_for_loss = POINTS_FOR_LOSS,
    points_for_no_result = POINTS_FOR_NO_RESULT
))]
fn py_calculate_standings(
    teams_json: &str,
    fixtures_json: &str,
    results_json: &str,
    stage: Option<String>,
    points_for_win: u32,
    points_for_loss: u32,
    points_for_no_result: u32,
) -> PyResult<Vec<StandingsRow>> {
    let snapshot = SeasonSnapshot::from_json(teams_json, fixtures_json, results_json)?;
    let config = config_from_args(stage, points_for_win, points_for_loss, points_for_no_result);
    Ok(standings_from_source(&snapshot, &config)?)
}

/// One points table per fixture stage.
#[pyfunction]
#[pyo3(signature = (
    teams_json,
    fixtures_json,
    results_json,
    points_for_win = POINTS_FOR_WIN,
    points_for_loss = POINTS_FOR_LOSS,
    points_for_no_result = POINTS_FOR_NO_RESULT
))]
fn py_calculate_stage_tables(
    teams_json: &str,
    fixtures_json: &str,
    results_json: &str,
    points_for_win: u32,
    points_for_loss: u32,
    points_for_no_result: u32,
) -> PyResult<Vec<StageTable>> {
    let snapshot = SeasonSnapshot::from_json(teams_json, fixtures_json, results_json)?;
    let config = config_from_args(None, points_for_win, points_for_loss, points_for_no_result);
    Ok(stage_tables_from_source(&snapshot, &config)?)
}

/// Python module definition
#[pymodule]
fn league_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<StandingsRow>()?;
    m.add_class::<StageTable>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_to_overs_decimal, m)?)?;
    m.add_function(wrap_pyfunction!(py_net_run_rate, m)?)?;
    m.add_function(wrap_pyfunction!(py_bowling_economy, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_standings, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_stage_tables, m)?)?;

    // Constants
    m.add("POINTS_FOR_WIN", POINTS_FOR_WIN)?;
    m.add("POINTS_FOR_LOSS", POINTS_FOR_LOSS)?;
    m.add("POINTS_FOR_NO_RESULT", POINTS_FOR_NO_RESULT)?;

    Ok(())
}
