//! Tourney Standings - multi-sport tournament standings service
//!
//! This crate keeps teams, players, matches and per-match statistics for a
//! soccer, basketball and cheerleading tournament, derives league tables and
//! leaderboards from them on demand, and serves the results over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod metrics;
pub mod schedule;
pub mod service;
pub mod standings;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use service::AppState;
pub use standings::{compute_standings, StandingRecord};
pub use storage::{InMemoryTournamentStorage, TournamentStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
