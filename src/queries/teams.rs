use super::Outcome;
use crate::data_fetcher::StatsClient;
use crate::error::AppError;
use crate::reference::ReferenceData;
use crate::writers::Writer;
use tracing::warn;

/// Squad of one team.
pub async fn get_team_players(
    reference: &ReferenceData,
    stats: &StatsClient,
    writer: &mut dyn Writer,
    team_code: &str,
) -> Result<Outcome, AppError> {
    let Some(team) = reference.team(team_code) else {
        return Ok(Outcome::no_data("Team code is not correct."));
    };

    let players = match stats.team_players(team.id).await {
        Ok(players) => players,
        Err(e) if e.is_api_error() => {
            warn!("Players request failed for {}: {e}", team.code);
            return Ok(Outcome::failed(
                "No data for the team. Please check the team code.",
            ));
        }
        Err(e) => return Err(e),
    };

    if players.count == 0 || players.is_empty() {
        return Ok(Outcome::no_data("No players found for this team"));
    }

    writer.team_players(&players)?;
    Ok(Outcome::Rendered)
}

/// Full name of a team code. Never touches the network.
pub fn lookup_team_name(reference: &ReferenceData, team_code: &str) -> Outcome {
    match reference.team(team_code) {
        Some(team) => Outcome::Info(team.name.clone()),
        None => Outcome::no_data("No team found for this code"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_team_name() {
        let reference = ReferenceData::load().unwrap();
        assert_eq!(
            lookup_team_name(&reference, "AFC"),
            Outcome::Info("Arsenal FC".to_string())
        );
        assert_eq!(
            lookup_team_name(&reference, "afc"),
            Outcome::Info("Arsenal FC".to_string())
        );
        assert_eq!(
            lookup_team_name(&reference, "NOPE"),
            Outcome::no_data("No team found for this code")
        );
    }
}
