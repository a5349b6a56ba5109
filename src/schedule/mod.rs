//! Match schedule views

use crate::types::{Match, Sport};
use chrono::{DateTime, Utc};

/// All matches of a sport, earliest first
pub fn matches_for_sport(matches: &[Match], sport: Sport) -> Vec<Match> {
    let mut selected: Vec<Match> = matches.iter().filter(|m| m.sport == sport).cloned().collect();
    sort_chronologically(&mut selected);
    selected
}

/// Matches of a sport scheduled at or after `now`, earliest first.
///
/// Status is not considered; a cancelled fixture in the future is still listed.
pub fn upcoming_matches(matches: &[Match], sport: Sport, now: DateTime<Utc>) -> Vec<Match> {
    let mut selected: Vec<Match> = matches
        .iter()
        .filter(|m| m.sport == sport && m.match_date >= now)
        .cloned()
        .collect();
    sort_chronologically(&mut selected);
    selected
}

/// Order matches by kickoff, then id
pub fn sort_chronologically(matches: &mut [Match]) {
    matches.sort_by(|a, b| a.match_date.cmp(&b.match_date).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchStatus;
    use chrono::{Duration, TimeZone};

    fn fixture(id: u32, sport: Sport, date: DateTime<Utc>) -> Match {
        Match {
            id,
            sport,
            home_team_id: 1,
            away_team_id: 2,
            match_date: date,
            venue: None,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
        }
    }

    #[test]
    fn test_upcoming_filters_past_and_other_sports() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let matches = vec![
            fixture(1, Sport::Soccer, now + Duration::days(3)),
            fixture(2, Sport::Soccer, now - Duration::days(1)),
            fixture(3, Sport::Basketball, now + Duration::days(1)),
            fixture(4, Sport::Soccer, now),
            fixture(5, Sport::Soccer, now + Duration::hours(2)),
        ];

        let upcoming = upcoming_matches(&matches, Sport::Soccer, now);
        let ids: Vec<_> = upcoming.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 5, 1]);
    }

    #[test]
    fn test_matches_for_sport_sorted_by_date_then_id() {
        let day = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let matches = vec![
            fixture(9, Sport::Basketball, day),
            fixture(3, Sport::Basketball, day),
            fixture(1, Sport::Basketball, day + Duration::days(1)),
            fixture(2, Sport::Soccer, day),
        ];

        let ids: Vec<_> = matches_for_sport(&matches, Sport::Basketball)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![3, 9, 1]);
    }
}
