//! Client for the live scores service

use reqwest::Client;
use tracing::{instrument, warn};

use super::fetch_utils::{decode, send};
use super::http_client::create_http_client_with_timeout;
use super::urls::join_url;
use crate::config::Config;
use crate::data_fetcher::models::LiveScores;
use crate::error::AppError;

/// Unauthenticated client for the live scores service.
#[derive(Debug, Clone)]
pub struct LiveClient {
    client: Client,
    base_url: String,
}

impl LiveClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: create_http_client_with_timeout(config.http_timeout_seconds)?,
            base_url: config.live_api_url.clone(),
        })
    }

    /// Fetches the games currently in progress.
    ///
    /// Any non-2xx status is reported as [`AppError::LiveScoresUnavailable`]
    /// rather than decomposed by status.
    #[instrument(skip(self))]
    pub async fn live_scores(&self) -> Result<LiveScores, AppError> {
        let url = join_url(&self.base_url, "");
        match send(&self.client, &url).await? {
            Ok(response) => decode(response, &url).await,
            Err(status) => {
                warn!("Live scores service answered {status}");
                Err(AppError::live_scores_unavailable(status))
            }
        }
    }
}
