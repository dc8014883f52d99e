//! Authenticated client for the football statistics API

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::http_client::create_authenticated_client;
use super::urls::{
    build_competition_fixtures_path, build_competition_path, build_fixtures_path,
    build_league_table_path, build_team_fixtures_path, build_team_players_path, join_url,
};
use crate::config::Config;
use crate::config::credential::ApiToken;
use crate::data_fetcher::models::{Competition, FixturesResponse, LeagueTable, TeamPlayers};
use crate::error::AppError;
use crate::queries::TimeWindow;

/// Stats API client. Holds the base URL and a client that sends the token
/// with every request.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &Config, token: &ApiToken) -> Result<Self, AppError> {
        let client = create_authenticated_client(config.http_timeout_seconds, token)?;
        Ok(Self {
            client,
            base_url: config.stats_api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET {base}/{path}` and decodes the body.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        fetch(&self.client, &join_url(&self.base_url, path)).await
    }

    pub async fn competition(&self, competition_id: u32) -> Result<Competition, AppError> {
        self.get(&build_competition_path(competition_id)).await
    }

    pub async fn league_table(
        &self,
        competition_id: u32,
        matchday: Option<u32>,
    ) -> Result<LeagueTable, AppError> {
        self.get(&build_league_table_path(competition_id, matchday))
            .await
    }

    pub async fn competition_fixtures(
        &self,
        competition_id: u32,
        window: &TimeWindow,
    ) -> Result<FixturesResponse, AppError> {
        self.get(&build_competition_fixtures_path(
            competition_id,
            &window.query_value(),
        ))
        .await
    }

    pub async fn fixtures(&self, window: &TimeWindow) -> Result<FixturesResponse, AppError> {
        self.get(&build_fixtures_path(&window.query_value())).await
    }

    pub async fn team_fixtures(
        &self,
        team_id: u32,
        window: &TimeWindow,
    ) -> Result<FixturesResponse, AppError> {
        self.get(&build_team_fixtures_path(team_id, &window.query_value()))
            .await
    }

    pub async fn team_players(&self, team_id: u32) -> Result<TeamPlayers, AppError> {
        self.get(&build_team_players_path(team_id)).await
    }
}
