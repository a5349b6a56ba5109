//! In-memory tournament storage

use crate::error::{Result, TournamentError};
use crate::storage::snapshot::Snapshot;
use crate::storage::{
    MatchUpdate, NewMatch, NewPlayer, NewPlayerStat, NewRanking, NewTeam, PlayerUpdate,
    RankingUpdate, StatLine, TeamUpdate, TournamentStorage,
};
use crate::types::{
    CheerleadingRanking, Match, MatchId, MatchStatus, Player, PlayerId, PlayerStat, RankingId,
    Sport, Team, TeamId,
};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    matches: BTreeMap<MatchId, Match>,
    stats: BTreeMap<u32, PlayerStat>,
    rankings: BTreeMap<RankingId, CheerleadingRanking>,
    next_team_id: u32,
    next_player_id: u32,
    next_match_id: u32,
    next_stat_id: u32,
    next_ranking_id: u32,
}

fn next_id(counter: &mut u32) -> u32 {
    *counter += 1;
    *counter
}

fn max_key<V>(map: &BTreeMap<u32, V>) -> u32 {
    map.keys().next_back().copied().unwrap_or(0)
}

fn require_name(name: &str, entity: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::invalid_input(format!("{} name cannot be empty", entity)).into());
    }
    Ok(trimmed.to_string())
}

/// In-memory storage backed by ordered maps behind a single lock
#[derive(Debug, Default)]
pub struct InMemoryTournamentStorage {
    tables: RwLock<Tables>,
}

impl InMemoryTournamentStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a snapshot. New ids continue after the highest seeded id.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut tables = Tables::default();

        tables.teams = snapshot.teams.into_iter().map(|t| (t.id, t)).collect();
        tables.players = snapshot.players.into_iter().map(|p| (p.id, p)).collect();
        tables.matches = snapshot.matches.into_iter().map(|m| (m.id, m)).collect();
        tables.stats = snapshot.player_stats.into_iter().map(|s| (s.id, s)).collect();
        tables.rankings = snapshot
            .cheerleading_rankings
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        tables.next_team_id = max_key(&tables.teams);
        tables.next_player_id = max_key(&tables.players);
        tables.next_match_id = max_key(&tables.matches);
        tables.next_stat_id = max_key(&tables.stats);
        tables.next_ranking_id = max_key(&tables.rankings);

        debug!(
            "Seeded storage with {} teams, {} players, {} matches, {} stat lines, {} rankings",
            tables.teams.len(),
            tables.players.len(),
            tables.matches.len(),
            tables.stats.len(),
            tables.rankings.len()
        );

        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Export the current contents
    pub fn snapshot(&self) -> Result<Snapshot> {
        let tables = self.read()?;
        Ok(Snapshot {
            teams: tables.teams.values().cloned().collect(),
            players: tables.players.values().cloned().collect(),
            matches: tables.matches.values().cloned().collect(),
            player_stats: tables.stats.values().cloned().collect(),
            cheerleading_rankings: tables.rankings.values().cloned().collect(),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| {
            TournamentError::Internal {
                message: "Failed to acquire storage read lock".to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| {
            TournamentError::Internal {
                message: "Failed to acquire storage write lock".to_string(),
            }
            .into()
        })
    }
}

impl TournamentStorage for InMemoryTournamentStorage {
    fn create_team(&self, team: NewTeam) -> Result<Team> {
        let name = require_name(&team.name, "Team")?;
        let mut tables = self.write()?;

        let team = Team {
            id: next_id(&mut tables.next_team_id),
            name,
            sport: team.sport,
            logo_url: team.logo_url,
        };
        tables.teams.insert(team.id, team.clone());
        Ok(team)
    }

    fn update_team(&self, id: TeamId, update: TeamUpdate) -> Result<Team> {
        let name = update
            .name
            .as_deref()
            .map(|n| require_name(n, "Team"))
            .transpose()?;
        let mut tables = self.write()?;

        let team = tables
            .teams
            .get_mut(&id)
            .ok_or_else(|| TournamentError::not_found("Team", id))?;
        if let Some(name) = name {
            team.name = name;
        }
        if let Some(logo_url) = update.logo_url {
            team.logo_url = Some(logo_url);
        }
        Ok(team.clone())
    }

    fn delete_team(&self, id: TeamId) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.teams.remove(&id).is_some())
    }

    fn get_team(&self, id: TeamId) -> Result<Option<Team>> {
        Ok(self.read()?.teams.get(&id).cloned())
    }

    fn teams_by_sport(&self, sport: Sport) -> Result<Vec<Team>> {
        let tables = self.read()?;
        Ok(tables
            .teams
            .values()
            .filter(|t| t.sport == sport)
            .cloned()
            .collect())
    }

    fn all_teams(&self) -> Result<Vec<Team>> {
        Ok(self.read()?.teams.values().cloned().collect())
    }

    fn create_player(&self, player: NewPlayer) -> Result<Player> {
        let name = require_name(&player.name, "Player")?;
        let mut tables = self.write()?;

        let player = Player {
            id: next_id(&mut tables.next_player_id),
            name,
            team_id: player.team_id,
            jersey_number: player.jersey_number,
            position: player.position,
        };
        tables.players.insert(player.id, player.clone());
        Ok(player)
    }

    fn update_player(&self, id: PlayerId, update: PlayerUpdate) -> Result<Player> {
        let name = update
            .name
            .as_deref()
            .map(|n| require_name(n, "Player"))
            .transpose()?;
        let mut tables = self.write()?;

        let player = tables
            .players
            .get_mut(&id)
            .ok_or_else(|| TournamentError::not_found("Player", id))?;
        if let Some(name) = name {
            player.name = name;
        }
        if let Some(jersey_number) = update.jersey_number {
            player.jersey_number = Some(jersey_number);
        }
        if let Some(position) = update.position {
            player.position = Some(position);
        }
        Ok(player.clone())
    }

    fn delete_player(&self, id: PlayerId) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.players.remove(&id).is_some())
    }

    fn players_by_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let tables = self.read()?;
        Ok(tables
            .players
            .values()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect())
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    fn create_match(&self, game: NewMatch) -> Result<Match> {
        if game.home_team_id == game.away_team_id {
            return Err(
                TournamentError::invalid_input("A team cannot play against itself").into(),
            );
        }
        let mut tables = self.write()?;

        let game = Match {
            id: next_id(&mut tables.next_match_id),
            sport: game.sport,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            match_date: game.match_date,
            venue: game.venue,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
        };
        tables.matches.insert(game.id, game.clone());
        Ok(game)
    }

    fn update_match(&self, id: MatchId, update: MatchUpdate) -> Result<Match> {
        let mut tables = self.write()?;

        let game = tables
            .matches
            .get_mut(&id)
            .ok_or_else(|| TournamentError::not_found("Match", id))?;
        if let Some(match_date) = update.match_date {
            game.match_date = match_date;
        }
        if let Some(venue) = update.venue {
            game.venue = Some(venue);
        }
        if let Some(status) = update.status {
            game.status = status;
        }
        if let Some(home_score) = update.home_score {
            game.home_score = Some(home_score);
        }
        if let Some(away_score) = update.away_score {
            game.away_score = Some(away_score);
        }
        Ok(game.clone())
    }

    fn delete_match(&self, id: MatchId) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.matches.remove(&id).is_some())
    }

    fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        Ok(self.read()?.matches.get(&id).cloned())
    }

    fn matches_by_sport(&self, sport: Sport) -> Result<Vec<Match>> {
        let tables = self.read()?;
        Ok(tables
            .matches
            .values()
            .filter(|m| m.sport == sport)
            .cloned()
            .collect())
    }

    fn all_matches(&self) -> Result<Vec<Match>> {
        Ok(self.read()?.matches.values().cloned().collect())
    }

    fn record_score(&self, id: MatchId, home_score: u32, away_score: u32) -> Result<Match> {
        self.update_match(
            id,
            MatchUpdate {
                status: Some(MatchStatus::Completed),
                home_score: Some(home_score),
                away_score: Some(away_score),
                ..Default::default()
            },
        )
    }

    fn create_player_stat(&self, stat: NewPlayerStat) -> Result<PlayerStat> {
        let mut tables = self.write()?;

        let stat = PlayerStat {
            id: next_id(&mut tables.next_stat_id),
            player_id: stat.player_id,
            match_id: stat.match_id,
            goals: stat.goals,
            points: stat.points,
            assists: stat.assists,
        };
        tables.stats.insert(stat.id, stat.clone());
        Ok(stat)
    }

    fn record_match_stats(&self, match_id: MatchId, lines: Vec<StatLine>) -> Result<Vec<PlayerStat>> {
        let mut tables = self.write()?;
        if !tables.matches.contains_key(&match_id) {
            return Err(TournamentError::not_found("Match", match_id).into());
        }

        let mut stored = Vec::new();
        for line in lines.into_iter().filter(|l| !l.is_blank()) {
            let stat = PlayerStat {
                id: next_id(&mut tables.next_stat_id),
                player_id: line.player_id,
                match_id,
                goals: Some(line.goals.unwrap_or(0)),
                points: Some(line.points.unwrap_or(0)),
                assists: Some(line.assists.unwrap_or(0)),
            };
            tables.stats.insert(stat.id, stat.clone());
            stored.push(stat);
        }

        debug!("Stored {} stat lines for match {}", stored.len(), match_id);
        Ok(stored)
    }

    fn stats_by_match(&self, match_id: MatchId) -> Result<Vec<PlayerStat>> {
        let tables = self.read()?;
        Ok(tables
            .stats
            .values()
            .filter(|s| s.match_id == match_id)
            .cloned()
            .collect())
    }

    fn all_player_stats(&self) -> Result<Vec<PlayerStat>> {
        Ok(self.read()?.stats.values().cloned().collect())
    }

    fn create_ranking(&self, ranking: NewRanking) -> Result<CheerleadingRanking> {
        let mut tables = self.write()?;

        let ranking = CheerleadingRanking {
            id: next_id(&mut tables.next_ranking_id),
            team_id: ranking.team_id,
            rank: ranking.rank,
            score: ranking.score,
            notes: ranking.notes,
        };
        tables.rankings.insert(ranking.id, ranking.clone());
        Ok(ranking)
    }

    fn update_ranking(&self, id: RankingId, update: RankingUpdate) -> Result<CheerleadingRanking> {
        let mut tables = self.write()?;

        let ranking = tables
            .rankings
            .get_mut(&id)
            .ok_or_else(|| TournamentError::not_found("Ranking", id))?;
        if let Some(rank) = update.rank {
            ranking.rank = rank;
        }
        if let Some(score) = update.score {
            ranking.score = Some(score);
        }
        if let Some(notes) = update.notes {
            ranking.notes = Some(notes);
        }
        Ok(ranking.clone())
    }

    fn delete_ranking(&self, id: RankingId) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.rankings.remove(&id).is_some())
    }

    fn cheerleading_rankings(&self) -> Result<Vec<CheerleadingRanking>> {
        Ok(self.read()?.rankings.values().cloned().collect())
    }
}
