//! Mineplex stats service: endpoint catalog, leaderboard scraper and client.

pub mod endpoints;
pub mod http;
pub mod keys;
pub mod leaderboard;
pub mod scrape;

pub use endpoints::{build, platform_endpoint, EndpointCatalog, EndpointKind, EndpointOptions};
pub use http::{LeaderboardQuery, MineplexClient};
pub use keys::{Board, Game, Platform};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use scrape::{scrape, Scraper, TagStripper, TextExtractor};
