//! Stats API token: parsing, lookup order and persistence.
//!
//! The token is looked up once at startup, in this order:
//! 1. `--apikey` on the command line
//! 2. the `SOCCER_CLI_API_TOKEN` environment variable
//! 3. `~/.soccer-cli.ini`, a single line holding the raw token
//!
//! When the file does not exist the user is prompted and the answer is
//! written to the file. An empty file is removed and treated as a missing
//! credential.

use super::paths::get_credential_path;
use super::user_prompts::prompt_for_api_token;
use crate::constants::{credential::TOKEN_LENGTH, env_vars};
use crate::error::AppError;
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// A validated stats API token: 32 hexadecimal characters.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Parses a token, ignoring surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use soccer_cli::config::credential::ApiToken;
    ///
    /// assert!(ApiToken::parse("0123456789abcdef0123456789abcdef\n").is_ok());
    /// assert!(ApiToken::parse("not-a-token").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let token = raw.trim();

        if token.len() != TOKEN_LENGTH {
            return Err(AppError::invalid_credential(format!(
                "expected {TOKEN_LENGTH} characters, got {}",
                token.len()
            )));
        }

        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::invalid_credential(
                "token must be hexadecimal",
            ));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken(****{})", &self.0[TOKEN_LENGTH - 4..])
    }
}

/// Resolves the token from the flag, the environment or the token file,
/// prompting on stdin when none of them has one.
pub async fn resolve_api_token(flag: Option<&str>) -> Result<ApiToken, AppError> {
    if let Some(raw) = flag {
        return ApiToken::parse(raw);
    }

    if let Ok(raw) = std::env::var(env_vars::API_TOKEN) {
        info!("Using API token from {}", env_vars::API_TOKEN);
        return ApiToken::parse(&raw);
    }

    let path = get_credential_path();
    if let Some(token) = load_token_file(&path).await? {
        return Ok(token);
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let token = prompt_for_api_token(stdin, &mut std::io::stdout()).await?;
    save_token_file(&path, &token).await?;
    Ok(token)
}

/// Reads the token file.
///
/// Returns `Ok(None)` when the file does not exist. An empty file is deleted
/// and reported as [`AppError::MissingCredential`].
pub async fn load_token_file(path: &Path) -> Result<Option<ApiToken>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        warn!("Removing empty token file {}", path.display());
        fs::remove_file(path).await?;
        return Err(AppError::MissingCredential);
    }

    ApiToken::parse(&content).map(Some)
}

/// Writes the raw token to the token file.
pub async fn save_token_file(path: &Path, token: &ApiToken) -> Result<(), AppError> {
    fs::write(path, token.as_str()).await?;
    info!("Saved API token to {}", path.display());
    Ok(())
}
