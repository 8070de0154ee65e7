use serde::{Deserialize, Serialize};

/// A league team as stored in the teams table.
///
/// Only the identifier and display name matter for the points table; other
/// columns (logo, captain, ...) are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl Team {
    /// Create a new Team.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
        }
    }
}
