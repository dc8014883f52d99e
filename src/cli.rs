use crate::constants::DEFAULT_TIME_WINDOW_DAYS;
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::ReferenceData;
use crate::writers::OutputTarget;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// A CLI for live and past football scores from various football leagues.
///
/// League codes:
///
///   CL: Champions League, EPL: Premier League, EL1: League One,
///   FL: Ligue 1, FL2: Ligue 2, BL: Bundesliga, BL2: 2. Bundesliga,
///   BL3: 3. Liga, SA: Serie A, DED: Eredivisie, PPL: Primeira Liga,
///   LLIGA: La Liga, SD: Segunda Division
#[derive(Parser, Debug, Clone)]
#[command(name = "soccer", version, about, long_about = None)]
#[command(styles = get_styles())]
#[command(group(ArgGroup::new("output").args(["stdout", "csv", "json"]).multiple(false)))]
pub struct Args {
    /// API key to use. Overrides the environment and the stored key.
    #[arg(long)]
    pub apikey: Option<String>,

    /// List all valid team code/team name pairs.
    #[arg(long = "list", help_heading = "Actions")]
    pub list_codes: bool,

    /// Show all the supported leagues.
    #[arg(long = "leagues", help_heading = "Actions")]
    pub list_leagues: bool,

    /// Show live scores from various leagues.
    #[arg(long, help_heading = "Actions")]
    pub live: bool,

    /// Time in seconds between live score refreshes. Zero or less shows
    /// live scores once.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true, help_heading = "Actions")]
    pub refresh: i64,

    /// Standings for a particular league.
    #[arg(long, help_heading = "Actions")]
    pub standings: bool,

    /// Show wins, draws, losses and home/away splits with --standings.
    #[arg(long, help_heading = "Actions")]
    pub extended: bool,

    /// The matchday of the league for which you want to see the standings.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true, help_heading = "Actions")]
    pub matchday: i64,

    /// Select fixtures, standings or live scores from a particular league.
    #[arg(long, value_name = "CODE", help_heading = "Selection")]
    pub league: Option<String>,

    /// Show players for a particular team.
    #[arg(long, help_heading = "Actions")]
    pub players: bool,

    /// Choose a particular team's fixtures.
    #[arg(long, value_name = "CODE", help_heading = "Selection")]
    pub team: Option<String>,

    /// Get the full team name from a team code, used with --team.
    #[arg(long, help_heading = "Actions")]
    pub lookup: bool,

    /// The number of days for which you want to see the scores.
    #[arg(long, default_value_t = DEFAULT_TIME_WINDOW_DAYS, allow_negative_numbers = true, help_heading = "Selection")]
    pub time: i64,

    /// Show upcoming games instead of past ones, used with --time.
    #[arg(long, help_heading = "Selection")]
    pub upcoming: bool,

    /// Display times using the 12 hour clock instead of 24.
    #[arg(long = "use12hour", help_heading = "Display Options")]
    pub use_12_hour: bool,

    /// Print to stdout (default).
    #[arg(long, help_heading = "Output")]
    pub stdout: bool,

    /// Output in CSV format.
    #[arg(long, help_heading = "Output")]
    pub csv: bool,

    /// Output in JSON format.
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Save output to a file. Only valid with --csv or --json.
    #[arg(short = 'o', long = "output-file", value_name = "PATH", help_heading = "Output")]
    pub output_file: Option<PathBuf>,

    /// Also write logs to the terminal at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Resolves where output goes. Terminal output cannot be combined with an
    /// output file, and file formats need one.
    pub fn output_target(&self) -> Result<OutputTarget, AppError> {
        match (self.csv, self.json, &self.output_file) {
            (true, _, Some(path)) => Ok(OutputTarget::Csv(path.clone())),
            (_, true, Some(path)) => Ok(OutputTarget::Json(path.clone())),
            (true, _, None) | (_, true, None) => Err(AppError::invalid_parameters(
                "Please specify an output file with -o when using --csv or --json.",
            )),
            (false, false, Some(_)) => Err(AppError::invalid_parameters(
                "Printing output to stdout and saving to a file are mutually exclusive",
            )),
            (false, false, None) => Ok(OutputTarget::Terminal),
        }
    }
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListTeams,
    ListLeagues,
    Live {
        league: Option<String>,
        refresh: i64,
    },
    Standings {
        league: String,
        extended: bool,
        matchday: Option<u32>,
    },
    TeamLookup {
        team: String,
    },
    TeamPlayers {
        team: String,
    },
    TeamScores {
        team: String,
        window: TimeWindow,
    },
    LeagueScores {
        league: Option<String>,
        window: TimeWindow,
    },
}

impl Action {
    /// Picks the action by flag precedence: team list, league list, live,
    /// standings, then (after the time window check) team actions and
    /// finally league or global fixtures.
    ///
    /// League codes are normalised to upper case and must exist in the
    /// league table. Team codes are checked by the handlers.
    pub fn from_args(args: &Args, reference: &ReferenceData) -> Result<Self, AppError> {
        if args.list_codes {
            return Ok(Action::ListTeams);
        }
        if args.list_leagues {
            return Ok(Action::ListLeagues);
        }

        let league = match &args.league {
            Some(code) => Some(
                reference
                    .league(code)
                    .map(|league| league.code.clone())
                    .ok_or_else(|| {
                        AppError::invalid_parameters(format!(
                            "Invalid league code {code}. Use --leagues to see the supported leagues."
                        ))
                    })?,
            ),
            None => None,
        };

        if args.live {
            return Ok(Action::Live {
                league,
                refresh: args.refresh,
            });
        }

        if args.standings {
            let league = league.ok_or_else(|| {
                AppError::invalid_parameters(
                    "Please specify a league. Example --standings --league=EPL",
                )
            })?;
            let matchday = u32::try_from(args.matchday).ok().filter(|m| *m > 0);
            return Ok(Action::Standings {
                league,
                extended: args.extended,
                matchday,
            });
        }

        let window = TimeWindow::new(args.time, args.upcoming)?;

        if let Some(team) = &args.team {
            let team = team.to_ascii_uppercase();
            return Ok(if args.lookup {
                Action::TeamLookup { team }
            } else if args.players {
                Action::TeamPlayers { team }
            } else {
                Action::TeamScores { team, window }
            });
        }

        Ok(Action::LeagueScores { league, window })
    }

    /// Whether the action talks to the authenticated stats API, and so needs
    /// a token.
    pub fn needs_stats_api(&self) -> bool {
        matches!(
            self,
            Action::Standings { .. }
                | Action::TeamPlayers { .. }
                | Action::TeamScores { .. }
                | Action::LeagueScores { .. }
        )
    }
}
