use super::Outcome;
use crate::data_fetcher::StatsClient;
use crate::data_fetcher::models::LeagueTable;
use crate::error::AppError;
use crate::reference::{League, ReferenceData};
use crate::writers::Writer;
use tracing::{info, warn};

fn no_standings(code: &str) -> Outcome {
    Outcome::no_data(format!("No standings available for {code}."))
}

/// Current table of a league.
pub async fn get_standings(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    league_code: &str,
    extended: bool,
) -> Result<Outcome, AppError> {
    let Some(league) = reference.league(league_code) else {
        return Ok(no_standings(league_code));
    };

    let table = stats.league_table(league.id, None).await;
    render_table(writer, league, table, extended)
}

/// Table of a league as of a past matchday. The competition is looked up
/// first and matchdays beyond the current one are refused without fetching
/// the table.
pub async fn get_matchday_standings(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    league_code: &str,
    extended: bool,
    matchday: u32,
) -> Result<Outcome, AppError> {
    let Some(league) = reference.league(league_code) else {
        return Ok(no_standings(league_code));
    };

    let competition = match stats.competition(league.id).await {
        Ok(competition) => competition,
        Err(e) if e.is_api_error() => {
            warn!("Competition lookup failed for {}: {e}", league.code);
            return Ok(no_standings(&league.code));
        }
        Err(e) => return Err(e),
    };

    if competition.current_matchday < matchday {
        info!(
            "Matchday {matchday} requested, current matchday is {}",
            competition.current_matchday
        );
        return Ok(Outcome::no_data(format!(
            "The current matchday for this league is {}, introduce a value that is less than or equal to it.",
            competition.current_matchday
        )));
    }

    let table = stats.league_table(league.id, Some(matchday)).await;
    render_table(writer, league, table, extended)
}

fn render_table(
    writer: &mut dyn Writer,
    league: &League,
    table: Result<LeagueTable, AppError>,
    extended: bool,
) -> Result<Outcome, AppError> {
    let table = match table {
        Ok(table) => table,
        Err(e) if e.is_api_error() => {
            warn!("League table request failed for {}: {e}", league.code);
            return Ok(no_standings(&league.code));
        }
        Err(e) => return Err(e),
    };

    if table.is_empty() {
        return Ok(no_standings(&league.code));
    }

    if extended {
        writer.standings_extended(&table, league)?;
    } else {
        writer.standings(&table, league)?;
    }
    Ok(Outcome::Rendered)
}
