//! Mineplex Stats Client Library
//!
//! A Rust client for the Mineplex player statistics service: a catalog of
//! JSON API endpoints and a scraper for the public leaderboard page.
//!
//! ## Features
//!
//! - **Endpoint Catalog**: Platform-scoped URL templates for boards, games, groups,
//!   leaderboards, players, stats and website lookups
//! - **Leaderboard Scraping**: Top 50 entries (rank, name, score) extracted from the HTML page
//! - **Name Constants**: Games, boards and platforms with forgiving parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mineplex_stats::{Board, Game, LeaderboardQuery, MineplexClient};
//!
//! # async fn example() -> mineplex_stats::Result<()> {
//! let client = MineplexClient::from_env()?;
//!
//! let query = LeaderboardQuery::new()
//!     .game(Game::SurvivalGames)
//!     .stat("Wins")
//!     .board(Board::AllTime);
//!
//! match client.get_leaderboard(&query).await? {
//!     Some(leaderboard) => leaderboard.for_each(|entry| println!("{entry}")),
//!     None => println!("No leaderboard for these parameters"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MINEPLEX_API_URL=https://mpstats.timmi6790.de/
//! export MINEPLEX_PLATFORM=java
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod mineplex;

// Re-export commonly used types
pub use crate::core::{ClientConfig, RawResponse};
pub use error::{MineplexError, Result};
pub use mineplex::{
    Board, EndpointCatalog, EndpointOptions, Game, Leaderboard, LeaderboardEntry,
    LeaderboardQuery, MineplexClient, Platform,
};

pub const API_URL_ENV_VAR: &str = "MINEPLEX_API_URL";
pub const LEADERBOARD_URL_ENV_VAR: &str = "MINEPLEX_LEADERBOARD_URL";
pub const PLATFORM_ENV_VAR: &str = "MINEPLEX_PLATFORM";
