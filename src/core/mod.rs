//! Core plumbing shared by the Mineplex client
//!
//! - `config`: service URLs and user agent, with environment overrides
//! - `http`: the raw fetcher used by every request path

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_LEADERBOARD_URL};
pub use http::{RawFetcher, RawResponse};
