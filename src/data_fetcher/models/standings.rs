use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Home or away split of a team's record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SplitRecord {
    #[serde(default)]
    pub goals: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub draws: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingRow {
    pub position: u32,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    pub points: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
    #[serde(rename = "goalDifference", default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub draws: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub home: Option<SplitRecord>,
    #[serde(default)]
    pub away: Option<SplitRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// League table, optionally as of a given matchday.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeagueTable {
    #[serde(rename = "leagueCaption", default)]
    pub league_caption: Option<String>,
    #[serde(default)]
    pub matchday: Option<u32>,
    #[serde(default)]
    pub standing: Vec<StandingRow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeagueTable {
    pub fn is_empty(&self) -> bool {
        self.standing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_with_splits() {
        let table: LeagueTable = serde_json::from_str(
            r#"{
                "leagueCaption": "Premier League 2017/18",
                "matchday": 10,
                "standing": [{
                    "position": 1,
                    "teamName": "Manchester City FC",
                    "crestURI": "http://example.com/crest.svg",
                    "playedGames": 10,
                    "points": 28,
                    "goals": 35,
                    "goalsAgainst": 6,
                    "goalDifference": 29,
                    "wins": 9,
                    "draws": 1,
                    "losses": 0,
                    "home": {"goals": 20, "goalsAgainst": 2, "wins": 5, "draws": 0, "losses": 0},
                    "away": {"goals": 15, "goalsAgainst": 4, "wins": 4, "draws": 1, "losses": 0}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(table.matchday, Some(10));
        let row = &table.standing[0];
        assert_eq!(row.points, 28);
        assert_eq!(row.home.as_ref().map(|h| h.goals), Some(20));
        assert_eq!(row.away.as_ref().map(|a| a.draws), Some(1));
        assert_eq!(row.extra["crestURI"], "http://example.com/crest.svg");
    }

    #[test]
    fn test_group_table_without_standing_is_empty() {
        // Cup competitions report groups instead of a single table
        let table: LeagueTable =
            serde_json::from_str(r#"{"leagueCaption": "Champions League", "standings": {"A": []}}"#)
                .unwrap();
        assert!(table.is_empty());
        assert!(table.extra.contains_key("standings"));
    }
}
