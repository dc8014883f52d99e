use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Final or current score of a fixture. Goals are `None` before kick-off.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixtureResult {
    #[serde(rename = "goalsHomeTeam", default)]
    pub goals_home_team: Option<i32>,
    #[serde(rename = "goalsAwayTeam", default)]
    pub goals_away_team: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub matchday: Option<u32>,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    #[serde(default)]
    pub result: FixtureResult,
    /// League code attached after the response is fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fixture {
    pub fn is_finished(&self) -> bool {
        self.status == "FINISHED"
    }

    /// Competition id taken from the last segment of
    /// `_links.competition.href`.
    pub fn competition_id(&self) -> Option<u32> {
        self.extra
            .get("_links")?
            .get("competition")?
            .get("href")?
            .as_str()?
            .trim_end_matches('/')
            .rsplit('/')
            .next()?
            .parse()
            .ok()
    }

    /// Kick-off date without the time part.
    pub fn day(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FixturesResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FixturesResponse {
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
