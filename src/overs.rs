use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::BALLS_PER_OVER;

/// An overs figure as it arrives from a scorecard.
///
/// Score entry forms store overs either as a number or as text in `overs.balls`
/// notation, where `19.4` means 19 complete overs and 4 legal deliveries.
#[cfg_attr(feature = "python", derive(pyo3::FromPyObject))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OversValue {
    Number(f64),
    Text(String),
}

impl OversValue {
    /// Decimal overs for rate arithmetic, see [`to_overs_decimal`].
    pub fn to_decimal(&self) -> f64 {
        to_overs_decimal(Some(self))
    }

    /// The value in `overs.balls` notation. Numbers are rounded to one
    /// decimal place first, so float noise such as `1e-7` never reads as a
    /// ball and `19.4` stays `"19.4"`.
    fn notation(&self) -> String {
        match self {
            OversValue::Number(n) => format!("{:.1}", n),
            OversValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<f64> for OversValue {
    fn from(value: f64) -> Self {
        OversValue::Number(value)
    }
}

impl From<&str> for OversValue {
    fn from(value: &str) -> Self {
        OversValue::Text(value.to_string())
    }
}

impl From<String> for OversValue {
    fn from(value: String) -> Self {
        OversValue::Text(value)
    }
}

/// Convert an overs value into a decimal number of overs.
///
/// `O.B` becomes `O + B/6`. A ball count outside 0-5 cannot come from legal
/// scoring, so it is treated as a data-entry error: only the whole overs are
/// counted and a warning is logged. Missing or empty values count as zero.
///
/// # Examples
/// ```
/// use league_core::{to_overs_decimal, OversValue};
///
/// let overs = OversValue::from("19.4");
/// assert!((to_overs_decimal(Some(&overs)) - (19.0 + 4.0 / 6.0)).abs() < 1e-12);
/// assert_eq!(to_overs_decimal(Some(&OversValue::from("19.7"))), 19.0);
/// assert_eq!(to_overs_decimal(None), 0.0);
/// ```
pub fn to_overs_decimal(value: Option<&OversValue>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };

    let notation = value.notation();
    if notation.is_empty() {
        return 0.0;
    }

    let (whole, balls) = match notation.split_once('.') {
        Some((whole, balls)) => (whole, Some(balls)),
        None => (notation.as_str(), None),
    };

    let Some(overs) = parse_whole_overs(whole) else {
        warn!(overs = %notation, "unreadable overs value, counting as zero");
        return 0.0;
    };

    let Some(balls) = balls else {
        return overs;
    };

    match parse_balls(balls) {
        Some(balls) => overs + f64::from(balls) / f64::from(BALLS_PER_OVER),
        None => {
            warn!(overs = %notation, "invalid ball count, counting whole overs only");
            overs
        }
    }
}

fn parse_whole_overs(whole: &str) -> Option<f64> {
    if whole.is_empty() {
        return Some(0.0);
    }
    whole.parse::<u32>().ok().map(f64::from)
}

// Completed deliveries in the current over: 0 through 5.
fn parse_balls(balls: &str) -> Option<u32> {
    if balls.is_empty() {
        return Some(0);
    }
    balls.parse::<u32>().ok().filter(|&b| b < BALLS_PER_OVER)
}
