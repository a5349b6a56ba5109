//! Table sorter
//!
//! Orders records by points, then differential, then goals scored, all
//! descending. There is no further tiebreak: records equal on all three keys
//! keep their incoming order.

use crate::standings::record::StandingRecord;
use std::cmp::Ordering;

/// Compare two records so that the better-placed one sorts first
pub fn compare_records(a: &StandingRecord, b: &StandingRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Sort records into table order. Rank is `index + 1`.
pub fn sort_table(mut records: Vec<StandingRecord>) -> Vec<StandingRecord> {
    // `sort_by` is stable, which is what keeps exact ties in seeding order
    records.sort_by(compare_records);
    records
}

/// True if every adjacent pair respects the table order
pub fn is_table_ordered(records: &[StandingRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| compare_records(&pair[0], &pair[1]) != Ordering::Greater)
}
