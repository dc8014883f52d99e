//! Generic HTTP fetching with status mapping and JSON decoding

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Sends a GET request and returns the response only for 2xx statuses.
///
/// Non-success statuses are returned as the raw status code so callers can
/// decide how to report them. Transport failures propagate unchanged.
pub(super) async fn send(client: &Client, url: &str) -> Result<Result<Response, u16>, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status.is_success() {
        Ok(Ok(response))
    } else {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        Ok(Err(status.as_u16()))
    }
}

/// Reads the body of a successful response and decodes it.
pub(super) async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, AppError> {
    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", text.len());
    let preview: String = text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    serde_json::from_str::<T>(&text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        AppError::ApiParse(e)
    })
}

/// Fetches and decodes a stats API resource. Non-2xx statuses map to
/// [`AppError::Api`]. Nothing is retried.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    match send(client, url).await? {
        Ok(response) => decode(response, url).await,
        Err(status) => Err(AppError::from_status(status)),
    }
}
