//! Live score polling.
//!
//! The loop moves through `Idle → Fetching → Rendering → (Waiting | Done)`.
//! With a positive refresh interval it sleeps that many seconds and fetches
//! again; a tick that renders nothing ends the loop with that tick's outcome.

use crate::data_fetcher::LiveClient;
use crate::error::AppError;
use crate::queries::{Outcome, get_live_scores};
use crate::writers::Writer;
use crate::writers::colors::{misc_fg, tie_fg};
use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
    Rendering,
    Waiting(Duration),
    Done,
}

impl PollState {
    /// State following a successful render.
    ///
    /// # Examples
    /// ```
    /// use soccer_cli::polling::PollState;
    /// use std::time::Duration;
    ///
    /// assert_eq!(PollState::after_render(30), PollState::Waiting(Duration::from_secs(30)));
    /// assert_eq!(PollState::after_render(-1), PollState::Done);
    /// ```
    pub fn after_render(refresh_seconds: i64) -> Self {
        match u64::try_from(refresh_seconds) {
            Ok(secs) if secs > 0 => PollState::Waiting(Duration::from_secs(secs)),
            _ => PollState::Done,
        }
    }
}

/// Settings for one polling session.
#[derive(Debug, Clone)]
pub struct PollSettings<'a> {
    pub league_code: Option<&'a str>,
    pub use_12_hour: bool,
    pub refresh_seconds: i64,
}

/// Fetches and renders live scores until a tick renders nothing or, without
/// a refresh interval, after the first tick. Refresh banners go to `notices`.
pub async fn run_live_polling<N: Write>(
    live: &LiveClient,
    writer: &mut dyn Writer,
    notices: &mut N,
    settings: &PollSettings<'_>,
) -> Result<Outcome, AppError> {
    let mut state = PollState::Idle;
    let mut outcome = Outcome::Rendered;
    let mut ticks = 0u32;

    loop {
        state = match state {
            PollState::Idle => PollState::Fetching,
            PollState::Fetching => {
                ticks += 1;
                debug!("Live scores tick {ticks}");
                outcome = get_live_scores(
                    live,
                    writer,
                    settings.league_code,
                    settings.use_12_hour,
                )
                .await?;
                if outcome.is_rendered() {
                    PollState::Rendering
                } else {
                    PollState::Done
                }
            }
            PollState::Rendering => PollState::after_render(settings.refresh_seconds),
            PollState::Waiting(interval) => {
                print_refresh_banner(notices, interval)?;
                tokio::time::sleep(interval).await;
                PollState::Fetching
            }
            PollState::Done => {
                info!("Live polling finished after {ticks} tick(s)");
                return Ok(outcome);
            }
        };
    }
}

fn print_refresh_banner<W: Write>(out: &mut W, interval: Duration) -> Result<(), AppError> {
    queue!(
        out,
        Print("\n"),
        SetForegroundColor(tie_fg()),
        Print("-------- Next refresh in "),
        SetForegroundColor(misc_fg()),
        SetAttribute(Attribute::Bold),
        Print(format!("{} seconds", interval.as_secs())),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(tie_fg()),
        Print(" --------"),
        ResetColor,
        Print("\n\n\n")
    )?;
    out.flush()?;
    Ok(())
}
