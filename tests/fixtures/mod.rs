//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tourney_standings::config::AppConfig;
use tourney_standings::metrics::MetricsCollector;
use tourney_standings::service::AppState;
use tourney_standings::storage::{
    InMemoryTournamentStorage, NewMatch, NewPlayer, NewTeam, TournamentStorage,
};
use tourney_standings::types::{Match, MatchId, MatchStatus, Player, Sport, Team, TeamId};

/// Fixed reference instant so schedule tests do not depend on the wall clock
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap()
}

/// Plain team value for engine-level tests
pub fn team(id: TeamId, name: &str, sport: Sport) -> Team {
    Team {
        id,
        name: name.to_string(),
        sport,
        logo_url: None,
    }
}

/// Plain completed soccer match value for engine-level tests
pub fn completed(id: MatchId, home: TeamId, away: TeamId, home_score: u32, away_score: u32) -> Match {
    Match {
        id,
        sport: Sport::Soccer,
        home_team_id: home,
        away_team_id: away,
        match_date: kickoff() + Duration::days(id as i64),
        venue: None,
        status: MatchStatus::Completed,
        home_score: Some(home_score),
        away_score: Some(away_score),
    }
}

/// Application state over a fresh in-memory store
pub fn create_test_state() -> (Arc<AppState>, Arc<InMemoryTournamentStorage>) {
    let storage = Arc::new(InMemoryTournamentStorage::new());
    let metrics = Arc::new(MetricsCollector::new().expect("Failed to create metrics collector"));
    let state = AppState::new(AppConfig::default(), storage.clone(), metrics);
    (Arc::new(state), storage)
}

/// Create teams in order and return them
pub fn seed_teams(storage: &InMemoryTournamentStorage, sport: Sport, names: &[&str]) -> Vec<Team> {
    names
        .iter()
        .map(|name| {
            storage
                .create_team(NewTeam {
                    name: name.to_string(),
                    sport,
                    logo_url: None,
                })
                .expect("Failed to create team")
        })
        .collect()
}

/// Schedule a match `days` after the reference kickoff
pub fn schedule(
    storage: &InMemoryTournamentStorage,
    sport: Sport,
    home: TeamId,
    away: TeamId,
    days: i64,
) -> Match {
    storage
        .create_match(NewMatch {
            sport,
            home_team_id: home,
            away_team_id: away,
            match_date: kickoff() + Duration::days(days),
            venue: Some("Main Field".to_string()),
        })
        .expect("Failed to create match")
}

/// Schedule a match and record its final score
pub fn play(
    storage: &InMemoryTournamentStorage,
    sport: Sport,
    home: TeamId,
    away: TeamId,
    home_score: u32,
    away_score: u32,
) -> Match {
    let game = schedule(storage, sport, home, away, 0);
    storage
        .record_score(game.id, home_score, away_score)
        .expect("Failed to record score")
}

pub fn sign_player(storage: &InMemoryTournamentStorage, team_id: TeamId, name: &str) -> Player {
    storage
        .create_player(NewPlayer {
            name: name.to_string(),
            team_id,
            jersey_number: None,
            position: None,
        })
        .expect("Failed to create player")
}
