//! Output renderers.
//!
//! A [`Writer`] is picked once per run by [`get_writer`] from the requested
//! [`OutputTarget`]; handlers only ever see the trait object.

pub mod colors;
pub mod csv;
pub mod json;
pub mod stdout;
pub mod time_formatting;

pub use self::csv::CsvWriter;
pub use self::json::JsonWriter;
pub use self::stdout::StdoutWriter;

use crate::data_fetcher::models::{FixturesResponse, LeagueTable, LiveScores, TeamPlayers};
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::League;
use std::path::PathBuf;

/// Rendering capability shared by every output target.
pub trait Writer {
    fn live_scores(&mut self, scores: &LiveScores, use_12_hour: bool) -> Result<(), AppError>;

    fn team_scores(
        &mut self,
        fixtures: &FixturesResponse,
        window: &TimeWindow,
        use_12_hour: bool,
    ) -> Result<(), AppError>;

    /// Fixtures are expected to carry a league label.
    fn league_scores(
        &mut self,
        fixtures: &FixturesResponse,
        window: &TimeWindow,
        use_12_hour: bool,
    ) -> Result<(), AppError>;

    fn standings(&mut self, table: &LeagueTable, league: &League) -> Result<(), AppError>;

    /// Standings with wins, draws, losses and home/away splits.
    fn standings_extended(&mut self, table: &LeagueTable, league: &League)
    -> Result<(), AppError>;

    fn team_players(&mut self, players: &TeamPlayers) -> Result<(), AppError>;
}

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Terminal,
    Csv(PathBuf),
    Json(PathBuf),
}

/// Builds the writer for an output target.
pub fn get_writer(target: &OutputTarget) -> Box<dyn Writer> {
    match target {
        OutputTarget::Terminal => Box::new(StdoutWriter::new(std::io::stdout())),
        OutputTarget::Csv(path) => Box::new(CsvWriter::new(path.clone())),
        OutputTarget::Json(path) => Box::new(JsonWriter::new(path.clone())),
    }
}
