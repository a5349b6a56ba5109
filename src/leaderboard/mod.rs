//! Individual and manual leaderboards
//!
//! Top scorers are aggregated from per-match player statistics; cheerleading
//! has no matches and is ranked by hand.

pub mod cheer;
pub mod scorers;

pub use cheer::{ranking_table, RankingEntry};
pub use scorers::{top_scorers, ScorerEntry, ScorerSources, DEFAULT_TOP_SCORERS_LIMIT};
