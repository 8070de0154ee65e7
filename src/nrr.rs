use crate::constants::NRR_DECIMALS;

/// Runs per over, or 0.0 when no overs have been recorded.
pub fn run_rate(runs: f64, overs: f64) -> f64 {
    if overs > 0.0 {
        runs / overs
    } else {
        0.0
    }
}

/// Calculate a team's net run rate.
///
/// The scoring rate minus the conceding rate, each accumulated over every
/// counted match and rounded to three decimal places. A side that has not
/// batted (or bowled) contributes a zero rate rather than NaN or infinity.
///
/// # Arguments
/// * `runs_scored` - Runs made by the team
/// * `overs_faced` - Decimal overs the team batted
/// * `runs_conceded` - Runs made against the team
/// * `overs_bowled` - Decimal overs the team bowled
pub fn net_run_rate(
    runs_scored: f64,
    overs_faced: f64,
    runs_conceded: f64,
    overs_bowled: f64,
) -> f64 {
    let scored_rate = run_rate(runs_scored, overs_faced);
    let conceded_rate = run_rate(runs_conceded, overs_bowled);
    round_to(scored_rate - conceded_rate, NRR_DECIMALS)
}

/// Round to a fixed number of decimal places, never returning negative zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(places as i32);
    // Adding 0.0 turns -0.0 into 0.0
    (value * scale).round() / scale + 0.0
}
