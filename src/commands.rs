use crate::cli::{Action, Args};
use crate::config::Config;
use crate::config::credential::{ApiToken, resolve_api_token};
use crate::data_fetcher::{LiveClient, StatsClient};
use crate::error::AppError;
use crate::polling::{PollSettings, run_live_polling};
use crate::queries::{self, Outcome};
use crate::reference::ReferenceData;
use crate::writers::colors::{error_fg, notice_fg, tie_fg};
use crate::writers::{Writer, get_writer};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{Write, stdout};
use tracing::info;

/// Runs the action selected by the command line.
///
/// The output target and the action are validated before anything else
/// happens, and the API token is only resolved for actions that use the
/// stats API.
pub async fn run(args: &Args, config: &Config) -> Result<Outcome, AppError> {
    let target = args.output_target()?;
    let reference = ReferenceData::load()?;
    let action = Action::from_args(args, &reference)?;
    info!("Running {action:?} with output {target:?}");

    let token = if action.needs_stats_api() {
        Some(resolve_api_token(args.apikey.as_deref()).await?)
    } else {
        None
    };

    let mut writer = get_writer(&target);
    let mut out = stdout();
    let outcome = execute(
        &action,
        &reference,
        config,
        token.as_ref(),
        writer.as_mut(),
        &mut out,
        args.use_12_hour,
    )
    .await?;

    report_outcome(&mut out, &outcome)?;
    Ok(outcome)
}

fn stats_client(config: &Config, token: Option<&ApiToken>) -> Result<StatsClient, AppError> {
    let token = token.ok_or(AppError::MissingCredential)?;
    StatsClient::new(config, token)
}

/// Dispatches one action. Listings and refresh banners go to `out`; data goes
/// to `writer`.
pub async fn execute<O: Write>(
    action: &Action,
    reference: &ReferenceData,
    config: &Config,
    token: Option<&ApiToken>,
    writer: &mut dyn Writer,
    out: &mut O,
    use_12_hour: bool,
) -> Result<Outcome, AppError> {
    match action {
        Action::ListTeams => {
            list_team_codes(reference, out)?;
            Ok(Outcome::Rendered)
        }
        Action::ListLeagues => {
            list_league_codes(reference, out)?;
            Ok(Outcome::Rendered)
        }
        Action::Live { league, refresh } => {
            let live = LiveClient::new(config)?;
            let settings = PollSettings {
                league_code: league.as_deref(),
                use_12_hour,
                refresh_seconds: *refresh,
            };
            run_live_polling(&live, writer, out, &settings).await
        }
        Action::Standings {
            league,
            extended,
            matchday,
        } => {
            let stats = stats_client(config, token)?;
            match matchday {
                Some(matchday) => {
                    queries::get_matchday_standings(
                        reference, &stats, writer, league, *extended, *matchday,
                    )
                    .await
                }
                None => queries::get_standings(reference, &stats, writer, league, *extended).await,
            }
        }
        Action::TeamLookup { team } => Ok(queries::lookup_team_name(reference, team)),
        Action::TeamPlayers { team } => {
            let stats = stats_client(config, token)?;
            queries::get_team_players(reference, &stats, writer, team).await
        }
        Action::TeamScores { team, window } => {
            let stats = stats_client(config, token)?;
            queries::get_team_scores(reference, &stats, writer, team, window, use_12_hour).await
        }
        Action::LeagueScores { league, window } => {
            let stats = stats_client(config, token)?;
            queries::get_league_scores(
                reference,
                &stats,
                writer,
                league.as_deref(),
                window,
                use_12_hour,
            )
            .await
        }
    }
}

fn styled_line<W: Write>(out: &mut W, text: &str, color: Color, bold: bool) -> Result<(), AppError> {
    queue!(out, SetForegroundColor(color))?;
    if bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )?;
    Ok(())
}

/// Prints team codes grouped by league, leagues and codes in alphabetical
/// order.
pub fn list_team_codes<W: Write>(reference: &ReferenceData, out: &mut W) -> Result<(), AppError> {
    for (league, teams) in reference.teams_by_league() {
        styled_line(out, league, notice_fg(), true)?;
        for team in teams {
            styled_line(out, &format!("{}: {}", team.code, team.name), tie_fg(), false)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}

/// Prints the supported leagues in table order.
pub fn list_league_codes<W: Write>(reference: &ReferenceData, out: &mut W) -> Result<(), AppError> {
    for league in reference.leagues() {
        styled_line(out, &format!("{}: {}", league.code, league.name), tie_fg(), false)?;
    }
    out.flush()?;
    Ok(())
}

/// Prints the one-line message of a non-rendered outcome.
pub fn report_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<(), AppError> {
    match outcome {
        Outcome::Rendered => {}
        Outcome::Info(msg) => styled_line(out, msg, notice_fg(), false)?,
        Outcome::NoData(msg) | Outcome::Failed(msg) => styled_line(out, msg, error_fg(), true)?,
    }
    out.flush()?;
    Ok(())
}

/// Prints an error as a single red line.
pub fn report_error<W: Write>(out: &mut W, error: &AppError) -> Result<(), AppError> {
    styled_line(out, &error.to_string(), error_fg(), true)?;
    out.flush()?;
    Ok(())
}
