//! Command implementations for the Mineplex stats CLI

pub mod endpoint;
pub mod leaderboard;
pub mod list;
