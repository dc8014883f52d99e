//! Static league and team tables bundled with the binary.
//!
//! User-supplied codes are resolved here before any request is built, so an
//! unknown code never reaches the API client.

pub mod live_names;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const LEAGUES_JSON: &str = include_str!("data/leagues.json");
const TEAMS_JSON: &str = include_str!("data/teams.json");

/// Inclusive table position range, e.g. `[1, 4]`.
pub type PositionRange = (u32, u32);

/// Table zones used to colour standings rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    ChampionsLeague,
    EuropaLeague,
    Relegation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionZones {
    #[serde(default)]
    pub cl: Option<PositionRange>,
    #[serde(default)]
    pub el: Option<PositionRange>,
    #[serde(default)]
    pub rl: Option<PositionRange>,
}

impl PositionZones {
    /// Returns the zone a table position falls into, if any.
    pub fn zone_for(&self, position: u32) -> Option<Zone> {
        let within = |range: Option<PositionRange>| {
            range.is_some_and(|(upper, lower)| upper <= position && position <= lower)
        };

        if within(self.cl) {
            Some(Zone::ChampionsLeague)
        } else if within(self.el) {
            Some(Zone::EuropaLeague)
        } else if within(self.rl) {
            Some(Zone::Relegation)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct League {
    pub code: String,
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub positions: Option<PositionZones>,
}

impl League {
    pub fn zone_for(&self, position: u32) -> Option<Zone> {
        self.positions.as_ref().and_then(|p| p.zone_for(position))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamLeague {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub code: String,
    pub id: u32,
    pub name: String,
    pub league: TeamLeague,
}

#[derive(Deserialize)]
struct LeagueFile {
    leagues: Vec<League>,
}

#[derive(Deserialize)]
struct TeamFile {
    teams: Vec<Team>,
}

/// Lookup tables for league and team codes.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    leagues: Vec<League>,
    teams: Vec<Team>,
}

impl ReferenceData {
    /// Loads the tables bundled with the binary.
    pub fn load() -> Result<Self, AppError> {
        Self::from_json(LEAGUES_JSON, TEAMS_JSON)
    }

    /// Builds the tables from JSON documents shaped like the bundled files.
    pub fn from_json(leagues_json: &str, teams_json: &str) -> Result<Self, AppError> {
        let leagues: LeagueFile = serde_json::from_str(leagues_json)
            .map_err(|e| AppError::reference_data_error(format!("leagues table: {e}")))?;
        let teams: TeamFile = serde_json::from_str(teams_json)
            .map_err(|e| AppError::reference_data_error(format!("teams table: {e}")))?;

        Self::new(leagues.leagues, teams.teams)
    }

    /// Builds the tables, rejecting duplicate codes.
    pub fn new(leagues: Vec<League>, teams: Vec<Team>) -> Result<Self, AppError> {
        ensure_unique(leagues.iter().map(|l| l.code.as_str()), "league")?;
        ensure_unique(teams.iter().map(|t| t.code.as_str()), "team")?;
        Ok(Self { leagues, teams })
    }

    /// Finds a league by code, ignoring case.
    pub fn league(&self, code: &str) -> Option<&League> {
        self.leagues
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code))
    }

    /// Finds a league by its numeric API id.
    pub fn league_by_id(&self, id: u32) -> Option<&League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    /// Finds a team by code, ignoring case.
    pub fn team(&self, code: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.code.eq_ignore_ascii_case(code))
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn league_codes(&self) -> Vec<&str> {
        self.leagues.iter().map(|l| l.code.as_str()).collect()
    }

    /// Teams grouped by league name, both levels in alphabetical order
    /// (teams by code).
    pub fn teams_by_league(&self) -> BTreeMap<&str, Vec<&Team>> {
        let mut grouped: BTreeMap<&str, Vec<&Team>> = BTreeMap::new();
        for team in &self.teams {
            grouped.entry(team.league.name.as_str()).or_default().push(team);
        }
        for teams in grouped.values_mut() {
            teams.sort_by(|a, b| a.code.cmp(&b.code));
        }
        grouped
    }
}

fn ensure_unique<'a>(codes: impl Iterator<Item = &'a str>, kind: &str) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for code in codes {
        if !seen.insert(code.to_ascii_uppercase()) {
            return Err(AppError::reference_data_error(format!(
                "duplicate {kind} code {code}"
            )));
        }
    }
    Ok(())
}
