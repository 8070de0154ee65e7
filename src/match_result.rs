use serde::{Deserialize, Serialize};

use crate::overs::{to_overs_decimal, OversValue};

/// The recorded outcome of a completed fixture.
///
/// `winner` is `None` for ties, abandoned matches and other no-results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Id of the fixture this result resolves
    pub match_id: String,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(flatten)]
    pub score: ScoreCard,
}

impl MatchResult {
    pub fn new(match_id: impl Into<String>, winner: Option<&str>, score: ScoreCard) -> Self {
        MatchResult {
            match_id: match_id.into(),
            winner: winner.map(str::to_string),
            score,
        }
    }

    /// Both innings in canonical form.
    pub fn innings(&self) -> InningsPair {
        self.score.innings()
    }
}

/// Score data in either of the two shapes the results table has used.
///
/// Older rows carry a nested `runs_wickets` object; newer ones use flat
/// `team_a_runs`/`team_b_overs` columns. Rows are normalized through
/// [`ScoreCard::innings`] before any aggregation happens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreCard {
    Nested { runs_wickets: NestedScore },
    Flat(FlatScore),
}

impl Default for ScoreCard {
    fn default() -> Self {
        ScoreCard::Flat(FlatScore::default())
    }
}

impl ScoreCard {
    /// Build a flat score card from both sides' entries.
    pub fn flat(team_a: InningsEntry, team_b: InningsEntry) -> Self {
        ScoreCard::Flat(FlatScore {
            team_a_runs: team_a.runs,
            team_a_wickets: team_a.wickets,
            team_a_overs: team_a.overs,
            team_b_runs: team_b.runs,
            team_b_wickets: team_b.wickets,
            team_b_overs: team_b.overs,
        })
    }

    /// Build a nested (`runs_wickets`) score card from both sides' entries.
    pub fn nested(team_a: InningsEntry, team_b: InningsEntry) -> Self {
        ScoreCard::Nested {
            runs_wickets: NestedScore { team_a, team_b },
        }
    }

    /// Normalize to one innings per side with overs already in decimal form.
    pub fn innings(&self) -> InningsPair {
        match self {
            ScoreCard::Nested { runs_wickets } => InningsPair {
                team_a: runs_wickets.team_a.normalize(),
                team_b: runs_wickets.team_b.normalize(),
            },
            ScoreCard::Flat(flat) => InningsPair {
                team_a: innings(flat.team_a_runs, flat.team_a_wickets, flat.team_a_overs.as_ref()),
                team_b: innings(flat.team_b_runs, flat.team_b_wickets, flat.team_b_overs.as_ref()),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatScore {
    pub team_a_runs: Option<u32>,
    pub team_a_wickets: Option<u32>,
    pub team_a_overs: Option<OversValue>,
    pub team_b_runs: Option<u32>,
    pub team_b_wickets: Option<u32>,
    pub team_b_overs: Option<OversValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedScore {
    pub team_a: InningsEntry,
    pub team_b: InningsEntry,
}

/// One side's score as entered: every part may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InningsEntry {
    pub runs: Option<u32>,
    pub wickets: Option<u32>,
    pub overs: Option<OversValue>,
}

impl InningsEntry {
    pub fn new(runs: u32, wickets: u32, overs: impl Into<OversValue>) -> Self {
        InningsEntry {
            runs: Some(runs),
            wickets: Some(wickets),
            overs: Some(overs.into()),
        }
    }

    fn normalize(&self) -> Option<Innings> {
        innings(self.runs, self.wickets, self.overs.as_ref())
    }
}

/// A side's innings in canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct Innings {
    pub runs: u32,
    /// Tracked for display; net run rate ignores it
    pub wickets: Option<u32>,
    /// Decimal overs
    pub overs: f64,
}

/// Both innings of a match. A side without recorded runs did not bat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InningsPair {
    pub team_a: Option<Innings>,
    pub team_b: Option<Innings>,
}

impl InningsPair {
    /// Both sides batted and finished level.
    pub fn is_tie(&self) -> bool {
        match (&self.team_a, &self.team_b) {
            (Some(a), Some(b)) => a.runs == b.runs,
            _ => false,
        }
    }
}

fn innings(runs: Option<u32>, wickets: Option<u32>, overs: Option<&OversValue>) -> Option<Innings> {
    runs.map(|runs| Innings {
        runs,
        wickets,
        overs: to_overs_decimal(overs),
    })
}
