//! Query handlers: one per user action.
//!
//! Each handler resolves codes against [`crate::reference::ReferenceData`],
//! talks to the API clients, post-processes the payload and hands it to a
//! [`crate::writers::Writer`]. Recoverable API problems become an
//! [`Outcome`] with a one-line message; transport and decoding failures
//! propagate as [`AppError`].

pub mod fixtures;
pub mod live;
pub mod standings;
pub mod teams;

pub use fixtures::{get_league_scores, get_team_scores};
pub use live::{filter_live_games, get_live_scores};
pub use standings::{get_matchday_standings, get_standings};
pub use teams::{get_team_players, lookup_team_name};

use crate::error::AppError;
use std::fmt;

/// What a handler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written.
    Rendered,
    /// An informational line for the user, e.g. a looked-up team name.
    Info(String),
    /// Nothing to show.
    NoData(String),
    /// The API refused or failed the request.
    Failed(String),
}

impl Outcome {
    pub fn no_data(msg: impl Into<String>) -> Self {
        Outcome::NoData(msg.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Outcome::Failed(msg.into())
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Rendered => None,
            Outcome::Info(msg) | Outcome::NoData(msg) | Outcome::Failed(msg) => Some(msg),
        }
    }
}

/// A number of days looking forward or backward from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    days: u32,
    upcoming: bool,
}

impl TimeWindow {
    /// Rejects windows shorter than one day.
    ///
    /// # Examples
    /// ```
    /// use soccer_cli::queries::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::new(6, false).unwrap().query_value(), "p6");
    /// assert_eq!(TimeWindow::new(3, true).unwrap().query_value(), "n3");
    /// assert!(TimeWindow::new(0, true).is_err());
    /// ```
    pub fn new(days: i64, upcoming: bool) -> Result<Self, AppError> {
        if days < 1 {
            return Err(AppError::invalid_parameters(
                "Please specify a time value greater than 0.",
            ));
        }
        let days = u32::try_from(days)
            .map_err(|_| AppError::invalid_parameters("Time value is too large."))?;
        Ok(Self { days, upcoming })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_upcoming(&self) -> bool {
        self.upcoming
    }

    /// Value of the `timeFrame` query parameter.
    pub fn query_value(&self) -> String {
        let prefix = if self.upcoming { 'n' } else { 'p' };
        format!("{prefix}{}", self.days)
    }

    /// "next" or "past", as used in user messages.
    pub fn word(&self) -> &'static str {
        if self.upcoming { "next" } else { "past" }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} days", self.word(), self.days)
    }
}
