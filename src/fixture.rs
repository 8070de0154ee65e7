use serde::{Deserialize, Serialize};

/// A scheduled match between two teams.
///
/// Team slots may be empty for knockout fixtures whose participants are not
/// decided yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    #[serde(default)]
    pub team_a: Option<String>,
    #[serde(default)]
    pub team_b: Option<String>,
    /// Competition stage, e.g. "Group", "Semi Final"
    #[serde(default)]
    pub stage: Option<String>,
}

impl Fixture {
    /// Create a fixture with both teams known and no stage tag.
    pub fn new(
        id: impl Into<String>,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
    ) -> Self {
        Fixture {
            id: id.into(),
            team_a: Some(team_a.into()),
            team_b: Some(team_b.into()),
            stage: None,
        }
    }

    /// Return a copy tagged with the given stage.
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Both team ids, if the fixture has been fully drawn.
    pub fn teams(&self) -> Option<(&str, &str)> {
        match (&self.team_a, &self.team_b) {
            (Some(a), Some(b)) => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}
