pub mod urls;
pub mod http_client;
mod fetch_utils;
mod live_api;
mod stats_api;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
pub use live_api::LiveClient;
pub use stats_api::StatsClient;
