//! Path builders for stats API endpoints
//!
//! Paths are relative to the configured base URL; [`join_url`] puts the two
//! together.

/// Joins a base URL and a relative path with exactly one slash.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::join_url;
///
/// assert_eq!(join_url("http://api.example.com/v1/", "fixtures"), "http://api.example.com/v1/fixtures");
/// assert_eq!(join_url("http://api.example.com/v1", "/fixtures"), "http://api.example.com/v1/fixtures");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Builds the path of a competition season.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_competition_path;
///
/// assert_eq!(build_competition_path(445), "competitions/445");
/// ```
pub fn build_competition_path(competition_id: u32) -> String {
    format!("competitions/{competition_id}")
}

/// Builds the league table path, optionally as of a matchday.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_league_table_path;
///
/// assert_eq!(build_league_table_path(445, None), "competitions/445/leagueTable");
/// assert_eq!(build_league_table_path(445, Some(3)), "competitions/445/leagueTable?matchday=3");
/// ```
pub fn build_league_table_path(competition_id: u32, matchday: Option<u32>) -> String {
    match matchday {
        Some(matchday) => format!("competitions/{competition_id}/leagueTable?matchday={matchday}"),
        None => format!("competitions/{competition_id}/leagueTable"),
    }
}

/// Builds the fixtures path of one competition.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_competition_fixtures_path;
///
/// assert_eq!(build_competition_fixtures_path(452, "p6"), "competitions/452/fixtures?timeFrame=p6");
/// ```
pub fn build_competition_fixtures_path(competition_id: u32, time_frame: &str) -> String {
    format!("competitions/{competition_id}/fixtures?timeFrame={time_frame}")
}

/// Builds the path of fixtures across all competitions.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_fixtures_path;
///
/// assert_eq!(build_fixtures_path("n3"), "fixtures?timeFrame=n3");
/// ```
pub fn build_fixtures_path(time_frame: &str) -> String {
    format!("fixtures?timeFrame={time_frame}")
}

/// Builds the fixtures path of one team.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_team_fixtures_path;
///
/// assert_eq!(build_team_fixtures_path(57, "p10"), "teams/57/fixtures?timeFrame=p10");
/// ```
pub fn build_team_fixtures_path(team_id: u32, time_frame: &str) -> String {
    format!("teams/{team_id}/fixtures?timeFrame={time_frame}")
}

/// Builds the squad path of one team.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_team_players_path;
///
/// assert_eq!(build_team_players_path(57), "teams/57/players");
/// ```
pub fn build_team_players_path(team_id: u32) -> String {
    format!("teams/{team_id}/players")
}
