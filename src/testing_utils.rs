use crate::data_fetcher::models::{
    Fixture, FixtureResult, FixturesResponse, LeagueTable, LiveGame, LiveScores, Player,
    SplitRecord, StandingRow, TeamPlayers,
};
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::League;
use crate::writers::Writer;
use serde_json::{Map, Value, json};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a fixture on 2017-08-11. Fixtures with both goals set are
    /// FINISHED, others TIMED.
    pub fn fixture(
        home_team: &str,
        away_team: &str,
        home_goals: Option<i32>,
        away_goals: Option<i32>,
    ) -> Fixture {
        let status = if home_goals.is_some() && away_goals.is_some() {
            "FINISHED"
        } else {
            "TIMED"
        };
        Fixture {
            date: "2017-08-11T18:45:00Z".to_string(),
            status: status.to_string(),
            matchday: Some(1),
            home_team_name: home_team.to_string(),
            away_team_name: away_team.to_string(),
            result: FixtureResult {
                goals_home_team: home_goals,
                goals_away_team: away_goals,
                extra: Map::new(),
            },
            league: None,
            extra: Map::new(),
        }
    }

    /// Creates a finished fixture linked to a competition id.
    pub fn fixture_in_competition(home_team: &str, away_team: &str, competition_id: u32) -> Fixture {
        let mut fixture = Self::fixture(home_team, away_team, Some(1), Some(0));
        fixture.extra.insert(
            "_links".to_string(),
            json!({
                "competition": {
                    "href": format!("http://api.football-data.org/v1/competitions/{competition_id}")
                }
            }),
        );
        fixture
    }

    pub fn fixtures(fixtures: Vec<Fixture>) -> FixturesResponse {
        FixturesResponse {
            count: Some(fixtures.len() as u32),
            fixtures,
            extra: Map::new(),
        }
    }

    /// Creates a table with the teams in the given order, with home/away
    /// splits.
    pub fn league_table(teams: &[&str]) -> LeagueTable {
        let standing = teams
            .iter()
            .enumerate()
            .map(|(index, team)| {
                let position = index as u32 + 1;
                let points = 30 - 3 * index as i32;
                StandingRow {
                    position,
                    team_name: team.to_string(),
                    played_games: 10,
                    points,
                    goals: 20,
                    goals_against: 10,
                    goal_difference: 10,
                    wins: points / 3,
                    draws: points % 3,
                    losses: 10 - points / 3 - points % 3,
                    home: Some(SplitRecord {
                        goals: 12,
                        goals_against: 4,
                        wins: 4,
                        draws: 1,
                        losses: 0,
                        extra: Map::new(),
                    }),
                    away: Some(SplitRecord {
                        goals: 8,
                        goals_against: 6,
                        wins: 3,
                        draws: 1,
                        losses: 1,
                        extra: Map::new(),
                    }),
                    extra: Map::new(),
                }
            })
            .collect();

        LeagueTable {
            league_caption: Some("Test League 2017/18".to_string()),
            matchday: Some(10),
            standing,
            extra: Map::new(),
        }
    }

    pub fn team_players(players: &[(&str, Option<u32>)]) -> TeamPlayers {
        TeamPlayers {
            count: players.len() as u32,
            players: players
                .iter()
                .map(|(name, jersey)| Player {
                    name: name.to_string(),
                    position: Some("Centre-Back".to_string()),
                    jersey_number: *jersey,
                    date_of_birth: Some("1990-01-01".to_string()),
                    nationality: Some("England".to_string()),
                    contract_until: Some("2020-06-30".to_string()),
                    market_value: None,
                    extra: Map::new(),
                })
                .collect(),
            extra: Map::new(),
        }
    }

    pub fn live_game(
        league: &str,
        home_team: &str,
        away_team: &str,
        home_goals: i32,
        away_goals: i32,
    ) -> LiveGame {
        LiveGame {
            league: league.to_string(),
            home_team_name: home_team.to_string(),
            away_team_name: away_team.to_string(),
            goals_home_team: Some(home_goals),
            goals_away_team: Some(away_goals),
            time: "57'".to_string(),
            extra: Map::new(),
        }
    }

    pub fn live_scores(games: Vec<LiveGame>) -> LiveScores {
        LiveScores {
            games,
            extra: Map::new(),
        }
    }

    /// Live service payload as JSON, games given as
    /// `(league name, home, away)`.
    pub fn live_payload(games: &[(&str, &str, &str)]) -> Value {
        let games: Vec<Value> = games
            .iter()
            .map(|(league, home, away)| {
                json!({
                    "league": league,
                    "homeTeamName": home,
                    "awayTeamName": away,
                    "goalsHomeTeam": 0,
                    "goalsAwayTeam": 0,
                    "time": "12'"
                })
            })
            .collect();
        json!({ "games": games })
    }
}

/// A render call captured by [`RecordingWriter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    LiveScores(LiveScores),
    TeamScores(FixturesResponse),
    LeagueScores(FixturesResponse),
    Standings { league: String, table: LeagueTable },
    StandingsExtended { league: String, table: LeagueTable },
    TeamPlayers(TeamPlayers),
}

/// Writer that records what it was asked to render.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub calls: Vec<Rendered>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Writer for RecordingWriter {
    fn live_scores(&mut self, scores: &LiveScores, _use_12_hour: bool) -> Result<(), AppError> {
        self.calls.push(Rendered::LiveScores(scores.clone()));
        Ok(())
    }

    fn team_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.calls.push(Rendered::TeamScores(fixtures.clone()));
        Ok(())
    }

    fn league_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.calls.push(Rendered::LeagueScores(fixtures.clone()));
        Ok(())
    }

    fn standings(&mut self, table: &LeagueTable, league: &League) -> Result<(), AppError> {
        self.calls.push(Rendered::Standings {
            league: league.code.clone(),
            table: table.clone(),
        });
        Ok(())
    }

    fn standings_extended(
        &mut self,
        table: &LeagueTable,
        league: &League,
    ) -> Result<(), AppError> {
        self.calls.push(Rendered::StandingsExtended {
            league: league.code.clone(),
            table: table.clone(),
        });
        Ok(())
    }

    fn team_players(&mut self, players: &TeamPlayers) -> Result<(), AppError> {
        self.calls.push(Rendered::TeamPlayers(players.clone()));
        Ok(())
    }
}
