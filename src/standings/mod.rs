//! League standings engine
//!
//! Derives a league table from the teams and matches of one sport. The engine
//! is a pure function of its inputs: it keeps no state between calls, so the
//! table is always recomputed from the current match list and reflects edits
//! and reverted results immediately.

pub mod record;
pub mod reducer;
pub mod sorter;

// Re-export commonly used types
pub use record::{StandingRecord, POINTS_FOR_DRAW, POINTS_FOR_LOSS, POINTS_FOR_WIN};
pub use reducer::{reduce_matches, MatchOutcome, MatchResultReducer, Reduction, ReductionSummary};
pub use sorter::{compare_records, is_table_ordered, sort_table};

use crate::types::{Match, Team};

/// Compute the ordered league table for one sport.
///
/// Both slices are expected to be scoped to the same sport already. Every team
/// appears exactly once in the result; index 0 is first place.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingRecord> {
    compute_standings_with_summary(teams, matches).0
}

/// Same as [`compute_standings`], also reporting how each match was treated
pub fn compute_standings_with_summary(
    teams: &[Team],
    matches: &[Match],
) -> (Vec<StandingRecord>, ReductionSummary) {
    let Reduction { records, summary } = reduce_matches(teams, matches);
    (sort_table(records), summary)
}
