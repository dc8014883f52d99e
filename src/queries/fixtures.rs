use super::{Outcome, TimeWindow};
use crate::data_fetcher::StatsClient;
use crate::data_fetcher::models::FixturesResponse;
use crate::error::AppError;
use crate::reference::ReferenceData;
use crate::writers::Writer;
use tracing::{debug, info, warn};

/// Fixtures of one team inside the time window.
pub async fn get_team_scores(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    team_code: &str,
    window: &TimeWindow,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    let Some(team) = reference.team(team_code) else {
        return Ok(Outcome::no_data("Team code is not correct."));
    };

    info!("Fetching fixtures for {} ({})", team.name, window);
    let fixtures = match stats.team_fixtures(team.id, window).await {
        Ok(fixtures) => fixtures,
        Err(e) if e.is_api_error() => {
            warn!("Team fixtures request failed: {e}");
            return Ok(Outcome::failed(e.to_string()));
        }
        Err(e) => return Err(e),
    };

    if fixtures.is_empty() {
        return Ok(Outcome::no_data(format!(
            "No action during {} {} days. Change the time parameter to get more fixtures.",
            window.word(),
            window.days()
        )));
    }

    writer.team_scores(&fixtures, window, use_12_hour)?;
    Ok(Outcome::Rendered)
}

/// Fixtures of one league, or of every known league when `league_code` is
/// `None`.
pub async fn get_league_scores(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    league_code: Option<&str>,
    window: &TimeWindow,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    match league_code {
        Some(code) => single_league_scores(reference, stats, writer, code, window, use_12_hour).await,
        None => all_league_scores(reference, stats, writer, window, use_12_hour).await,
    }
}

async fn single_league_scores(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    league_code: &str,
    window: &TimeWindow,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    let Some(league) = reference.league(league_code) else {
        return Ok(Outcome::no_data("No data for the given league."));
    };

    let mut fixtures = match stats.competition_fixtures(league.id, window).await {
        Ok(fixtures) => fixtures,
        Err(e) if e.is_api_error() => {
            warn!("League fixtures request failed: {e}");
            return Ok(Outcome::failed("No data for the given league."));
        }
        Err(e) => return Err(e),
    };

    if fixtures.is_empty() {
        return Ok(Outcome::no_data(format!(
            "No {} matches in the {} {} days.",
            league.code,
            window.word(),
            window.days()
        )));
    }

    for fixture in &mut fixtures.fixtures {
        fixture.league = Some(league.code.clone());
    }

    writer.league_scores(&fixtures, window, use_12_hour)?;
    Ok(Outcome::Rendered)
}

async fn all_league_scores(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    window: &TimeWindow,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    let fixtures = match stats.fixtures(window).await {
        Ok(fixtures) => fixtures,
        Err(e) if e.is_api_error() => {
            warn!("Fixtures request failed: {e}");
            return Ok(Outcome::failed("No data available."));
        }
        Err(e) => return Err(e),
    };

    let fixtures = label_known_leagues(reference, fixtures);
    if fixtures.is_empty() {
        return Ok(Outcome::no_data(format!(
            "No matches in the {} {} days.",
            window.word(),
            window.days()
        )));
    }

    writer.league_scores(&fixtures, window, use_12_hour)?;
    Ok(Outcome::Rendered)
}

/// Keeps fixtures of competitions in the league table, labelled with their
/// league code.
pub fn label_known_leagues(
    reference: &ReferenceData,
    mut response: FixturesResponse,
) -> FixturesResponse {
    let total = response.fixtures.len();
    response.fixtures.retain_mut(|fixture| {
        match fixture
            .competition_id()
            .and_then(|id| reference.league_by_id(id))
        {
            Some(league) => {
                fixture.league = Some(league.code.clone());
                true
            }
            None => false,
        }
    });
    debug!(
        "Kept {} of {} fixtures from known leagues",
        response.fixtures.len(),
        total
    );
    response
}
