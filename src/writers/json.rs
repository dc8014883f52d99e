use super::Writer;
use crate::data_fetcher::models::{FixturesResponse, LeagueTable, LiveScores, TeamPlayers};
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::League;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Writes each bundle pretty-printed to the destination file, replacing its
/// previous contents.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write<T: Serialize>(&self, bundle: &T) -> Result<(), AppError> {
        let mut body = serde_json::to_string_pretty(bundle)?;
        body.push('\n');
        std::fs::write(&self.path, body)?;
        info!("Wrote JSON output to {}", self.path.display());
        Ok(())
    }
}

impl Writer for JsonWriter {
    fn live_scores(&mut self, scores: &LiveScores, _use_12_hour: bool) -> Result<(), AppError> {
        self.write(scores)
    }

    fn team_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.write(fixtures)
    }

    fn league_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.write(fixtures)
    }

    fn standings(&mut self, table: &LeagueTable, _league: &League) -> Result<(), AppError> {
        self.write(table)
    }

    fn standings_extended(
        &mut self,
        table: &LeagueTable,
        _league: &League,
    ) -> Result<(), AppError> {
        self.write(table)
    }

    fn team_players(&mut self, players: &TeamPlayers) -> Result<(), AppError> {
        self.write(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    /// Every key/value of `original` must be present in `written`.
    fn assert_contains(original: &Value, written: &Value) {
        match (original, written) {
            (Value::Object(a), Value::Object(b)) => {
                for (key, value) in a {
                    let other = b.get(key).unwrap_or_else(|| panic!("missing key {key}"));
                    assert_contains(value, other);
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                assert_eq!(a.len(), b.len());
                for (x, y) in a.iter().zip(b) {
                    assert_contains(x, y);
                }
            }
            _ => assert_eq!(original, written),
        }
    }

    #[test]
    fn test_fixtures_round_trip_keeps_every_field() {
        let original = serde_json::json!({
            "_links": {"self": {"href": "http://api.football-data.org/v1/fixtures?timeFrame=p6"}},
            "timeFrameStart": "2017-08-05",
            "timeFrameEnd": "2017-08-11",
            "count": 1,
            "fixtures": [{
                "_links": {"competition": {"href": "http://api.football-data.org/v1/competitions/445"}},
                "date": "2017-08-11T18:45:00Z",
                "status": "FINISHED",
                "matchday": 1,
                "homeTeamName": "Arsenal FC",
                "awayTeamName": "Leicester City FC",
                "result": {"goalsHomeTeam": 4, "goalsAwayTeam": 3, "halfTime": {"goalsHomeTeam": 2, "goalsAwayTeam": 2}},
                "odds": null
            }]
        });
        let fixtures: FixturesResponse = serde_json::from_value(original.clone()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut writer = JsonWriter::new(path.clone());
        writer
            .team_scores(&fixtures, &TimeWindow::new(6, false).unwrap(), false)
            .unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_contains(&original, &written);
    }

    #[test]
    fn test_players_round_trip_keeps_nulls() {
        let original = serde_json::json!({
            "count": 1,
            "players": [{
                "name": "Petr Čech",
                "position": "Keeper",
                "jerseyNumber": 33,
                "dateOfBirth": "1982-05-20",
                "nationality": "Czech Republic",
                "contractUntil": "2019-06-30",
                "marketValue": null
            }]
        });
        let players: TeamPlayers = serde_json::from_value(original.clone()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("players.json");
        JsonWriter::new(path.clone()).team_players(&players).unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_contains(&original, &written);
    }
}
