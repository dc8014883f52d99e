use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<u32>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(rename = "contractUntil", default)]
    pub contract_until: Option<String>,
    #[serde(rename = "marketValue", default)]
    pub market_value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Squad list for a team.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamPlayers {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamPlayers {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players ordered by jersey number; players without one go last.
    pub fn sorted_by_jersey(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|p| (p.jersey_number.is_none(), p.jersey_number));
        players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players_json() -> &'static str {
        r#"{
            "count": 3,
            "players": [
                {"name": "Mesut Özil", "position": "Attacking Midfield", "jerseyNumber": 11,
                 "dateOfBirth": "1988-10-15", "nationality": "Germany",
                 "contractUntil": "2018-06-30", "marketValue": null},
                {"name": "Petr Čech", "position": "Keeper", "jerseyNumber": 33,
                 "dateOfBirth": "1982-05-20", "nationality": "Czech Republic",
                 "contractUntil": "2019-06-30", "marketValue": null},
                {"name": "Unknown Trialist", "position": null, "jerseyNumber": null,
                 "dateOfBirth": null, "nationality": null, "contractUntil": null, "marketValue": null}
            ]
        }"#
    }

    #[test]
    fn test_sorted_by_jersey_puts_missing_last() {
        let squad: TeamPlayers = serde_json::from_str(players_json()).unwrap();
        let order: Vec<Option<u32>> = squad.sorted_by_jersey().iter().map(|p| p.jersey_number).collect();
        assert_eq!(order, vec![Some(11), Some(33), None]);
    }

    #[test]
    fn test_null_market_value_is_kept_on_output() {
        let squad: TeamPlayers = serde_json::from_str(players_json()).unwrap();
        let back = serde_json::to_value(&squad).unwrap();
        assert!(back["players"][0].as_object().unwrap().contains_key("marketValue"));
        assert_eq!(back["players"][0]["marketValue"], Value::Null);
    }
}
