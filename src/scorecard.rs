use serde::{Deserialize, Serialize};

use crate::overs::{to_overs_decimal, OversValue};

/// A bowler's figures from one innings of a scorecard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingLine {
    pub player_name: String,
    #[serde(default)]
    pub overs: Option<OversValue>,
    #[serde(default)]
    pub maidens: u32,
    #[serde(default)]
    pub runs_conceded: u32,
    #[serde(default)]
    pub wickets: u32,
}

impl BowlingLine {
    /// Runs conceded per over, `None` if the bowler has not completed a ball.
    pub fn economy(&self) -> Option<f64> {
        bowling_economy(self.runs_conceded, self.overs.as_ref())
    }
}

/// Runs conceded per over.
///
/// Overs are read in `overs.balls` notation, so 3.4 overs is 22 balls.
pub fn bowling_economy(runs_conceded: u32, overs: Option<&OversValue>) -> Option<f64> {
    let overs = to_overs_decimal(overs);
    if overs > 0.0 {
        Some(f64::from(runs_conceded) / overs)
    } else {
        None
    }
}
