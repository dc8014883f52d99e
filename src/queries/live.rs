use super::Outcome;
use crate::data_fetcher::LiveClient;
use crate::data_fetcher::models::LiveScores;
use crate::error::AppError;
use crate::reference::live_names::{code_for_live_name, live_name_for};
use crate::writers::Writer;
use tracing::{debug, warn};

/// Games in progress, optionally restricted to one league code.
pub async fn get_live_scores(
    live: &LiveClient,
    writer: &mut dyn Writer,
    league_code: Option<&str>,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    let scores = match live.live_scores().await {
        Ok(scores) => scores,
        Err(e) if e.is_api_error() => {
            warn!("Live scores request failed: {e}");
            return Ok(Outcome::failed("There was a problem getting live scores"));
        }
        Err(e) => return Err(e),
    };

    if scores.is_empty() {
        return Ok(Outcome::no_data("No live action currently"));
    }

    let scores = match league_code {
        Some(code) => {
            let filtered = filter_live_games(scores, code);
            if filtered.is_empty() {
                return Ok(Outcome::no_data(format!(
                    "No live action currently for {}.",
                    code.to_ascii_uppercase()
                )));
            }
            filtered
        }
        None => relabel_known_leagues(scores),
    };

    writer.live_scores(&scores, use_12_hour)?;
    Ok(Outcome::Rendered)
}

/// Keeps the games of one league, relabelled with its code.
///
/// Games are matched on the live service's own spelling of the league name.
pub fn filter_live_games(mut scores: LiveScores, league_code: &str) -> LiveScores {
    let code = league_code.to_ascii_uppercase();
    let Some(live_name) = live_name_for(&code) else {
        scores.games.clear();
        return scores;
    };

    scores.games.retain(|game| game.league == live_name);
    for game in &mut scores.games {
        game.league = code.clone();
    }
    debug!("{} live games for {code}", scores.games.len());
    scores
}

/// Replaces live service league names with league codes where known.
pub fn relabel_known_leagues(mut scores: LiveScores) -> LiveScores {
    for game in &mut scores.games {
        if let Some(code) = code_for_live_name(&game.league) {
            game.league = code.to_string();
        }
    }
    scores
}
