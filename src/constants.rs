//! Application-wide constants and configuration values
//!
//! This module centralizes endpoint addresses, defaults and environment
//! variable names so they are not scattered across the codebase.

/// Base address of the football statistics API
pub const DEFAULT_STATS_API_URL: &str = "http://api.football-data.org/v1";

/// Base address of the live scores service
pub const DEFAULT_LIVE_API_URL: &str = "http://soccer-cli.appspot.com";

/// Where users can register for a stats API token
pub const API_TOKEN_SIGNUP_URL: &str = "http://api.football-data.org/register";

/// Header carrying the stats API token
pub const AUTH_HEADER: &str = "x-auth-token";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default time window for fixture queries, in days
pub const DEFAULT_TIME_WINDOW_DAYS: i64 = 6;

/// Credential settings
pub mod credential {
    /// Name of the token file in the user's home directory
    pub const FILE_NAME: &str = ".soccer-cli.ini";

    /// Tokens are exactly this many hexadecimal characters
    pub const TOKEN_LENGTH: usize = 32;
}

/// Environment variable names
pub mod env_vars {
    /// Stats API token, takes precedence over the token file
    pub const API_TOKEN: &str = "SOCCER_CLI_API_TOKEN";

    /// Stats API base address override
    pub const STATS_API_URL: &str = "SOCCER_CLI_STATS_URL";

    /// Live scores service base address override
    pub const LIVE_API_URL: &str = "SOCCER_CLI_LIVE_URL";

    /// Log file path override
    pub const LOG_FILE: &str = "SOCCER_CLI_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SOCCER_CLI_HTTP_TIMEOUT";
}

/// Terminal layout
pub mod layout {
    /// Width of the `==== LEAGUE ====` banner
    pub const LEAGUE_HEADER_WIDTH: usize = 62;

    /// Column width for team names in score lines
    pub const TEAM_NAME_WIDTH: usize = 25;
}

/// Default log file name
pub const LOG_FILE_NAME: &str = "soccer_cli.log";
