use std::fmt;
use thiserror::Error;

/// Error kinds reported by the stats API, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    Forbidden,
    NotFound,
    RateLimited,
    Unknown(u16),
}

impl ApiErrorKind {
    /// Maps a non-success HTTP status code to its error kind.
    ///
    /// # Examples
    /// ```
    /// use soccer_cli::error::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
    /// assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Unknown(500));
    /// ```
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            429 => ApiErrorKind::RateLimited,
            other => ApiErrorKind::Unknown(other),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::BadRequest => write!(f, "Invalid request. Check parameters."),
            ApiErrorKind::Forbidden => write!(f, "This resource is restricted"),
            ApiErrorKind::NotFound => {
                write!(f, "This resource does not exist. Check parameters")
            }
            ApiErrorKind::RateLimited => {
                write!(f, "You have exceeded your allowed requests per minute/day")
            }
            ApiErrorKind::Unknown(status) => {
                write!(f, "Unexpected response from the API (HTTP {status})")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Api(ApiErrorKind),

    #[error("There was a problem getting live scores (HTTP {status})")]
    LiveScoresUnavailable { status: u16 },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    #[error("Invalid API key: {0}")]
    InvalidCredential(String),

    #[error(
        "No API Token detected. Please visit {} and get an API Token, \
         which will be used by Soccer CLI to get access to the data.",
        crate::constants::API_TOKEN_SIGNUP_URL
    )]
    MissingCredential,

    #[error("{0}")]
    InvalidParameters(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an API error from a non-success HTTP status code
    pub fn from_status(status: u16) -> Self {
        Self::Api(ApiErrorKind::from_status(status))
    }

    /// Create a live scores error for a non-success status from the live service
    pub fn live_scores_unavailable(status: u16) -> Self {
        Self::LiveScoresUnavailable { status }
    }

    /// Create an invalid parameters error with context
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create an invalid credential error with context
    pub fn invalid_credential(msg: impl Into<String>) -> Self {
        Self::InvalidCredential(msg.into())
    }

    /// Create a reference data error with context
    pub fn reference_data_error(msg: impl Into<String>) -> Self {
        Self::ReferenceData(msg.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error came from a remote service rejecting the request.
    /// These are turned into one-line messages by the query handlers.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            AppError::Api(_) | AppError::LiveScoresUnavailable { .. }
        )
    }

    /// Errors that are reported to the user as a single line before exiting
    /// with a non-zero status, instead of being propagated as a failure.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidParameters(_)
                | AppError::InvalidCredential(_)
                | AppError::MissingCredential
        )
    }
}
