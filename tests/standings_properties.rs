//! Property tests for the league table engine

mod fixtures;

use chrono::Duration;
use proptest::prelude::*;
use tourney_standings::standings::{
    compute_standings, is_table_ordered, StandingRecord, POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
use tourney_standings::types::{Match, MatchStatus, Sport, Team};

use fixtures::{kickoff, team};

const MAX_TEAMS: u32 = 8;

fn teams_strategy() -> impl Strategy<Value = Vec<Team>> {
    (1..=MAX_TEAMS).prop_map(|n| {
        (1..=n)
            .map(|id| team(id, &format!("Team {}", id), Sport::Soccer))
            .collect()
    })
}

fn status_strategy() -> impl Strategy<Value = MatchStatus> {
    prop_oneof![
        Just(MatchStatus::Scheduled),
        Just(MatchStatus::InProgress),
        Just(MatchStatus::Completed),
        Just(MatchStatus::Cancelled),
    ]
}

/// Matches between ids in `1..=MAX_TEAMS + 2`, so some reference unknown teams
fn matches_strategy() -> impl Strategy<Value = Vec<Match>> {
    prop::collection::vec(
        (
            1..=MAX_TEAMS + 2,
            1..=MAX_TEAMS + 2,
            status_strategy(),
            prop::option::weighted(0.9, 0u32..10),
            prop::option::weighted(0.9, 0u32..10),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (home, away, status, home_score, away_score))| Match {
                id: i as u32 + 1,
                sport: Sport::Soccer,
                home_team_id: home,
                away_team_id: away,
                match_date: kickoff() + Duration::hours(i as i64),
                venue: None,
                status,
                home_score,
                away_score,
            })
            .collect()
    })
}

fn find(table: &[StandingRecord], id: u32) -> &StandingRecord {
    table.iter().find(|r| r.team_id == id).unwrap()
}

proptest! {
    /// Property: exactly one record per team, whatever the matches
    #[test]
    fn prop_one_record_per_team(teams in teams_strategy(), matches in matches_strategy()) {
        let table = compute_standings(&teams, &matches);
        prop_assert_eq!(table.len(), teams.len());
        for t in &teams {
            prop_assert_eq!(table.iter().filter(|r| r.team_id == t.id).count(), 1);
        }
    }

    /// Property: no matches means an all-zero table
    #[test]
    fn prop_empty_matches_yield_zero_records(teams in teams_strategy()) {
        let table = compute_standings(&teams, &[]);
        prop_assert!(table.iter().all(|r| r.is_untouched()));
    }

    /// Property: the table is always ordered by points, differential, goals scored
    #[test]
    fn prop_table_is_ordered(teams in teams_strategy(), matches in matches_strategy()) {
        let table = compute_standings(&teams, &matches);
        prop_assert!(is_table_ordered(&table));
        for pair in table.windows(2) {
            prop_assert!(pair[0].points >= pair[1].points);
        }
    }

    /// Property: matches that are not final never touch the table
    #[test]
    fn prop_non_final_matches_are_ignored(
        teams in teams_strategy(),
        matches in matches_strategy(),
    ) {
        let pending: Vec<Match> = matches
            .into_iter()
            .filter(|m| m.final_score().is_none())
            .collect();
        let table = compute_standings(&teams, &pending);
        prop_assert!(table.iter().all(|r| r.is_untouched()));
    }

    /// Property: one final match moves both teams symmetrically under the 3/1/0 policy
    #[test]
    fn prop_single_match_is_symmetric(home_score in 0u32..20, away_score in 0u32..20) {
        let teams = vec![
            team(1, "Home", Sport::Soccer),
            team(2, "Away", Sport::Soccer),
        ];
        let game = Match {
            id: 1,
            sport: Sport::Soccer,
            home_team_id: 1,
            away_team_id: 2,
            match_date: kickoff(),
            venue: None,
            status: MatchStatus::Completed,
            home_score: Some(home_score),
            away_score: Some(away_score),
        };

        let table = compute_standings(&teams, &[game]);
        let home = find(&table, 1);
        let away = find(&table, 2);

        prop_assert_eq!(home.played, 1);
        prop_assert_eq!(away.played, 1);
        prop_assert_eq!(home.goals_for, away.goals_against);
        prop_assert_eq!(away.goals_for, home.goals_against);
        prop_assert_eq!(home.goal_difference, -away.goal_difference);

        let expected = match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => (POINTS_FOR_WIN, 0),
            std::cmp::Ordering::Equal => (POINTS_FOR_DRAW, POINTS_FOR_DRAW),
            std::cmp::Ordering::Less => (0, POINTS_FOR_WIN),
        };
        prop_assert_eq!((home.points, away.points), expected);
    }

    /// Property: each record stays internally consistent
    #[test]
    fn prop_records_are_consistent(teams in teams_strategy(), matches in matches_strategy()) {
        let table = compute_standings(&teams, &matches);
        for r in &table {
            prop_assert_eq!(r.played, r.won + r.drawn + r.lost);
            prop_assert_eq!(r.points, r.won * POINTS_FOR_WIN + r.drawn * POINTS_FOR_DRAW);
            prop_assert_eq!(r.goal_difference, r.goals_for as i64 - r.goals_against as i64);
        }
    }

    /// Property: recomputing from the same inputs gives the same table
    #[test]
    fn prop_recomputation_is_deterministic(
        teams in teams_strategy(),
        matches in matches_strategy(),
    ) {
        prop_assert_eq!(
            compute_standings(&teams, &matches),
            compute_standings(&teams, &matches)
        );
    }
}

#[test]
fn test_exact_ties_keep_team_order() {
    let teams: Vec<Team> = ["Delta", "Alpha", "Charlie"]
        .iter()
        .enumerate()
        .map(|(i, name)| team(i as u32 + 1, name, Sport::Soccer))
        .collect();

    let table = compute_standings(&teams, &[]);
    let names: Vec<_> = table.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(names, vec!["Delta", "Alpha", "Charlie"]);
}
