//! Football scores in the terminal
//!
//! This library fetches fixtures, standings, squads and live games from a
//! football statistics API and a live scores service, and renders them to
//! the terminal, a CSV file or a JSON file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use soccer_cli::config::credential::ApiToken;
//! use soccer_cli::data_fetcher::StatsClient;
//! use soccer_cli::queries::get_standings;
//! use soccer_cli::reference::ReferenceData;
//! use soccer_cli::writers::{OutputTarget, get_writer};
//! use soccer_cli::{AppError, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let token = ApiToken::parse("0123456789abcdef0123456789abcdef")?;
//!     let stats = StatsClient::new(&config, &token)?;
//!     let reference = ReferenceData::load()?;
//!
//!     let mut writer = get_writer(&OutputTarget::Terminal);
//!     get_standings(&reference, &stats, writer.as_mut(), "EPL", false).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod polling;
pub mod queries;
pub mod reference;
pub mod testing_utils;
pub mod writers;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{LiveClient, StatsClient};
pub use error::AppError;
pub use queries::{Outcome, TimeWindow};
pub use reference::ReferenceData;
pub use writers::{OutputTarget, Writer, get_writer};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
