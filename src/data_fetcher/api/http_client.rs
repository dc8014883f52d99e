//! HTTP client creation and configuration utilities

use crate::config::credential::ApiToken;
use crate::constants::{AUTH_HEADER, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates an HTTP client with the configured timeout and a bounded
/// connection pool.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates the stats API client. The token travels as a default header on
/// every request made through it.
pub fn create_authenticated_client(
    timeout_seconds: u64,
    token: &ApiToken,
) -> Result<Client, AppError> {
    let mut value = HeaderValue::from_str(token.as_str())
        .map_err(|_| AppError::invalid_credential("API token contains invalid characters"))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTH_HEADER, value);

    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?)
}
