//! Typed views of the stats and live API payloads.
//!
//! Every model keeps unrecognised fields in a flattened `extra` map so that
//! JSON output reproduces the payload as received.

pub mod competition;
pub mod fixtures;
pub mod live;
pub mod players;
pub mod standings;

pub use competition::Competition;
pub use fixtures::{Fixture, FixtureResult, FixturesResponse};
pub use live::{LiveGame, LiveScores};
pub use players::{Player, TeamPlayers};
pub use standings::{LeagueTable, SplitRecord, StandingRow};
