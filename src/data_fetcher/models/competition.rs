use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A competition season as returned by `competitions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competition {
    pub id: u32,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(rename = "currentMatchday")]
    pub current_matchday: u32,
    #[serde(rename = "numberOfMatchdays", default)]
    pub number_of_matchdays: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_parses() {
        let competition: Competition = serde_json::from_str(
            r#"{
                "id": 445,
                "caption": "Premier League 2017/18",
                "league": "PL",
                "year": "2017",
                "currentMatchday": 10,
                "numberOfMatchdays": 38,
                "numberOfTeams": 20
            }"#,
        )
        .unwrap();

        assert_eq!(competition.id, 445);
        assert_eq!(competition.current_matchday, 10);
        assert_eq!(competition.number_of_matchdays, Some(38));
        assert_eq!(competition.extra["league"], "PL");
    }
}
