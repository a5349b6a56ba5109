//! Tournament storage interface and implementations
//!
//! This module defines the interface for persisting and retrieving teams,
//! players, matches, player statistics and cheerleading rankings. The read
//! views (standings, top scorers, schedules) only ever take fresh snapshots
//! through this trait.

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryTournamentStorage;
pub use snapshot::Snapshot;

use crate::types::{
    CheerleadingRanking, Match, MatchId, MatchStatus, Player, PlayerId, PlayerStat, RankingId,
    Sport, Team, TeamId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields for a new team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub sport: Sport,
    pub logo_url: Option<String>,
}

/// Partial team update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

/// Fields for a new player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub team_id: TeamId,
    pub jersey_number: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub jersey_number: Option<String>,
    pub position: Option<String>,
}

/// Fields for a new fixture. New matches always start `scheduled` without scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    pub sport: Sport,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
}

/// Partial match update, used to reschedule, change status or correct scores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchUpdate {
    pub match_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<MatchStatus>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

/// Fields for a new player stat line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayerStat {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub goals: Option<u32>,
    pub points: Option<u32>,
    pub assists: Option<u32>,
}

/// One player's line in a bulk stats submission for a match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    pub goals: Option<u32>,
    pub points: Option<u32>,
    pub assists: Option<u32>,
    pub yellow_cards: Option<u32>,
    pub red_cards: Option<u32>,
}

impl StatLine {
    /// True when every counter is absent or zero
    pub fn is_blank(&self) -> bool {
        [
            self.goals,
            self.points,
            self.assists,
            self.yellow_cards,
            self.red_cards,
        ]
        .iter()
        .all(|v| v.unwrap_or(0) == 0)
    }
}

/// Fields for a new cheerleading ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRanking {
    pub team_id: TeamId,
    pub rank: u32,
    pub score: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingUpdate {
    pub rank: Option<u32>,
    pub score: Option<u32>,
    pub notes: Option<String>,
}

/// Trait for tournament storage operations
#[cfg_attr(test, mockall::automock)]
pub trait TournamentStorage: Send + Sync {
    // Teams
    fn create_team(&self, team: NewTeam) -> crate::error::Result<Team>;
    fn update_team(&self, id: TeamId, update: TeamUpdate) -> crate::error::Result<Team>;
    fn delete_team(&self, id: TeamId) -> crate::error::Result<bool>;
    fn get_team(&self, id: TeamId) -> crate::error::Result<Option<Team>>;
    fn teams_by_sport(&self, sport: Sport) -> crate::error::Result<Vec<Team>>;
    fn all_teams(&self) -> crate::error::Result<Vec<Team>>;

    // Players
    fn create_player(&self, player: NewPlayer) -> crate::error::Result<Player>;
    fn update_player(&self, id: PlayerId, update: PlayerUpdate) -> crate::error::Result<Player>;
    fn delete_player(&self, id: PlayerId) -> crate::error::Result<bool>;
    fn players_by_team(&self, team_id: TeamId) -> crate::error::Result<Vec<Player>>;
    fn all_players(&self) -> crate::error::Result<Vec<Player>>;

    // Matches
    fn create_match(&self, game: NewMatch) -> crate::error::Result<Match>;
    fn update_match(&self, id: MatchId, update: MatchUpdate) -> crate::error::Result<Match>;
    fn delete_match(&self, id: MatchId) -> crate::error::Result<bool>;
    fn get_match(&self, id: MatchId) -> crate::error::Result<Option<Match>>;
    fn matches_by_sport(&self, sport: Sport) -> crate::error::Result<Vec<Match>>;
    fn all_matches(&self) -> crate::error::Result<Vec<Match>>;

    /// Record a final score and mark the match completed
    fn record_score(
        &self,
        id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> crate::error::Result<Match>;

    // Player statistics
    fn create_player_stat(&self, stat: NewPlayerStat) -> crate::error::Result<PlayerStat>;

    /// Store a batch of stat lines for one match, skipping blank lines
    fn record_match_stats(
        &self,
        match_id: MatchId,
        lines: Vec<StatLine>,
    ) -> crate::error::Result<Vec<PlayerStat>>;
    fn stats_by_match(&self, match_id: MatchId) -> crate::error::Result<Vec<PlayerStat>>;
    fn all_player_stats(&self) -> crate::error::Result<Vec<PlayerStat>>;

    // Cheerleading rankings
    fn create_ranking(&self, ranking: NewRanking) -> crate::error::Result<CheerleadingRanking>;
    fn update_ranking(
        &self,
        id: RankingId,
        update: RankingUpdate,
    ) -> crate::error::Result<CheerleadingRanking>;
    fn delete_ranking(&self, id: RankingId) -> crate::error::Result<bool>;
    fn cheerleading_rankings(&self) -> crate::error::Result<Vec<CheerleadingRanking>>;
}
