//! Where league data comes from.
//!
//! The calculator only ever sees plain slices. A [`LeagueSource`] is handed
//! in explicitly by the caller, so a hosted database client, a JSON export or
//! a test fixture can all feed the same computation.

use std::fs;
use std::path::Path;

use crate::config::StandingsConfig;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::match_result::MatchResult;
use crate::standings::{calculate_stage_tables, calculate_standings, StageTable, StandingsRow};
use crate::team::Team;

/// Read access to the three tables the points table is built from.
pub trait LeagueSource {
    fn teams(&self) -> Result<Vec<Team>>;

    fn fixtures(&self) -> Result<Vec<Fixture>>;

    /// Completed results only; unplayed fixtures must not appear here.
    fn results(&self) -> Result<Vec<MatchResult>>;
}

/// An in-memory copy of a season's rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeasonSnapshot {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    pub results: Vec<MatchResult>,
}

impl SeasonSnapshot {
    pub fn new(teams: Vec<Team>, fixtures: Vec<Fixture>, results: Vec<MatchResult>) -> Self {
        SeasonSnapshot {
            teams,
            fixtures,
            results,
        }
    }

    /// Parse three JSON arrays of rows, as returned by the data store.
    pub fn from_json(teams: &str, fixtures: &str, results: &str) -> Result<Self> {
        Ok(SeasonSnapshot {
            teams: serde_json::from_str(teams)?,
            fixtures: serde_json::from_str(fixtures)?,
            results: serde_json::from_str(results)?,
        })
    }

    /// Read `teams.json`, `fixtures.json` and `results.json` from a directory.
    pub fn read_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let teams = fs::read_to_string(dir.join("teams.json"))?;
        let fixtures = fs::read_to_string(dir.join("fixtures.json"))?;
        let results = fs::read_to_string(dir.join("results.json"))?;
        Self::from_json(&teams, &fixtures, &results)
    }
}

impl LeagueSource for SeasonSnapshot {
    fn teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }

    fn fixtures(&self) -> Result<Vec<Fixture>> {
        Ok(self.fixtures.clone())
    }

    fn results(&self) -> Result<Vec<MatchResult>> {
        Ok(self.results.clone())
    }
}

/// Fetch everything from `source` and compute the points table.
pub fn standings_from_source<S: LeagueSource + ?Sized>(
    source: &S,
    config: &StandingsConfig,
) -> Result<Vec<StandingsRow>> {
    let teams = source.teams()?;
    let fixtures = source.fixtures()?;
    let results = source.results()?;
    Ok(calculate_standings(&teams, &fixtures, &results, config))
}

/// Fetch everything from `source` and compute one table per stage.
pub fn stage_tables_from_source<S: LeagueSource + ?Sized>(
    source: &S,
    config: &StandingsConfig,
) -> Result<Vec<StageTable>> {
    let teams = source.teams()?;
    let fixtures = source.fixtures()?;
    let results = source.results()?;
    Ok(calculate_stage_tables(&teams, &fixtures, &results, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueError;
    use std::path::PathBuf;

    const TEAMS: &str = r#"[
        {"id": "A", "name": "Alpha", "logo": null},
        {"id": "B", "name": "Beta"}
    ]"#;
    const FIXTURES: &str = r#"[{"id": "f1", "team_a": "A", "team_b": "B", "stage": "Group"}]"#;
    const RESULTS: &str = r#"[{
        "match_id": "f1", "winner": "A",
        "team_a_runs": 150, "team_a_wickets": 4, "team_a_overs": "20.0",
        "team_b_runs": 140, "team_b_wickets": 8, "team_b_overs": "20.0"
    }]"#;

    struct Offline;

    impl LeagueSource for Offline {
        fn teams(&self) -> Result<Vec<Team>> {
            Err(LeagueError::Source("store unreachable".to_string()))
        }

        fn fixtures(&self) -> Result<Vec<Fixture>> {
            Ok(Vec::new())
        }

        fn results(&self) -> Result<Vec<MatchResult>> {
            Ok(Vec::new())
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("league_core_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_standings_from_json_snapshot() {
        let snapshot = SeasonSnapshot::from_json(TEAMS, FIXTURES, RESULTS).unwrap();
        let table = standings_from_source(&snapshot, &StandingsConfig::group_stage_only()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].team_name, "Alpha");
        assert_eq!(table[0].nrr, 0.5);
        assert_eq!(table[1].nrr, -0.5);
    }

    #[test]
    fn test_source_error_propagates() {
        let err = standings_from_source(&Offline, &StandingsConfig::default()).unwrap_err();
        assert!(matches!(err, LeagueError::Source(_)));
        assert!(err.to_string().contains("store unreachable"));
    }

    #[test]
    fn test_dyn_source() {
        let snapshot = SeasonSnapshot::from_json(TEAMS, FIXTURES, RESULTS).unwrap();
        let source: &dyn LeagueSource = &snapshot;

        let tables = stage_tables_from_source(source, &StandingsConfig::default()).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].stage, "Group");
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = SeasonSnapshot::from_json("[{\"id\": 1}]", "[]", "[]").unwrap_err();
        assert!(matches!(err, LeagueError::Json(_)));
    }

    #[test]
    fn test_read_from_dir() {
        let dir = temp_dir("read");
        fs::write(dir.join("teams.json"), TEAMS).unwrap();
        fs::write(dir.join("fixtures.json"), FIXTURES).unwrap();
        fs::write(dir.join("results.json"), RESULTS).unwrap();

        let snapshot = SeasonSnapshot::read_from_dir(&dir).unwrap();
        assert_eq!(snapshot, SeasonSnapshot::from_json(TEAMS, FIXTURES, RESULTS).unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_from_dir_missing_file() {
        let dir = temp_dir("missing");
        fs::write(dir.join("teams.json"), TEAMS).unwrap();

        let err = SeasonSnapshot::read_from_dir(&dir).unwrap_err();
        assert!(matches!(err, LeagueError::Io(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
