use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A game in progress as reported by the live scores service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveGame {
    /// League name in the live service's spelling, or a league code once
    /// relabelled.
    pub league: String,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    #[serde(rename = "goalsHomeTeam", default)]
    pub goals_home_team: Option<i32>,
    #[serde(rename = "goalsAwayTeam", default)]
    pub goals_away_team: Option<i32>,
    #[serde(default)]
    pub time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LiveScores {
    #[serde(default)]
    pub games: Vec<LiveGame>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LiveScores {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
