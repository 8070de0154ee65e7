//! Points-table configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{GROUP_STAGE, POINTS_FOR_LOSS, POINTS_FOR_NO_RESULT, POINTS_FOR_WIN};
use crate::error::Result;

/// Which fixtures count toward a points table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageFilter {
    /// Every fixture counts, whatever its stage.
    #[default]
    All,
    /// Only fixtures tagged with exactly this stage count. Untagged fixtures
    /// are left out.
    Only(String),
}

impl StageFilter {
    pub fn admits(&self, stage: Option<&str>) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Only(wanted) => stage == Some(wanted.as_str()),
        }
    }
}

/// Scoring rules for a points table.
///
/// Loaded from TOML, e.g.
///
/// ```toml
/// points_for_win = 2
/// points_for_no_result = 0
/// stage_filter = { only = "Group" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsConfig {
    pub stage_filter: StageFilter,
    pub points_for_win: u32,
    pub points_for_loss: u32,
    /// Awarded to both sides on a tie, abandonment or other no-result
    pub points_for_no_result: u32,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        StandingsConfig {
            stage_filter: StageFilter::All,
            points_for_win: POINTS_FOR_WIN,
            points_for_loss: POINTS_FOR_LOSS,
            points_for_no_result: POINTS_FOR_NO_RESULT,
        }
    }
}

impl StandingsConfig {
    /// Default points, counting regular-season ("Group") fixtures only.
    pub fn group_stage_only() -> Self {
        StandingsConfig {
            stage_filter: StageFilter::Only(GROUP_STAGE.to_string()),
            ..Default::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Same point rules, restricted to one stage.
    pub fn for_stage(&self, stage: &str) -> Self {
        StandingsConfig {
            stage_filter: StageFilter::Only(stage.to_string()),
            ..self.clone()
        }
    }
}
