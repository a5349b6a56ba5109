//! Main application state and query coordination
//!
//! `AppState` ties the storage collaborator, the standings engine, the
//! leaderboards and metrics together. Every query takes a fresh read from
//! storage; nothing derived is cached between calls.

use crate::config::AppConfig;
use crate::error::{Result, TournamentError};
use crate::leaderboard::{self, RankingEntry, ScorerEntry, ScorerSources};
use crate::metrics::MetricsCollector;
use crate::schedule;
use crate::standings::{self, StandingRecord};
use crate::storage::{InMemoryTournamentStorage, Snapshot, TournamentStorage};
use crate::types::{Match, MatchId, Player, PlayerStat, Sport, Team, TeamId};
use crate::utils::{clamp_limit, current_timestamp};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Main application state containing all service components
pub struct AppState {
    /// Application configuration
    config: AppConfig,

    /// Source of truth for teams, matches and statistics
    storage: Arc<dyn TournamentStorage>,

    /// Metrics collector shared with the HTTP layer
    metrics: Arc<MetricsCollector>,

    started_at: Instant,
}

impl AppState {
    /// Assemble the state from already constructed components
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn TournamentStorage>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            config,
            storage,
            metrics,
            started_at: Instant::now(),
        }
    }

    /// Initialize the application from configuration, seeding storage from
    /// the configured snapshot if there is one
    pub fn from_config(config: AppConfig) -> Result<Self> {
        info!("Initializing {} service", config.service.name);

        let storage = match &config.data.snapshot_path {
            Some(path) => {
                info!("Seeding storage from snapshot {}", path.display());
                InMemoryTournamentStorage::from_snapshot(Snapshot::load(path)?)
            }
            None => {
                warn!("No snapshot configured, starting with an empty store");
                InMemoryTournamentStorage::new()
            }
        };
        let metrics = MetricsCollector::new()?;

        Ok(Self::new(config, Arc::new(storage), Arc::new(metrics)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage(&self) -> Arc<dyn TournamentStorage> {
        self.storage.clone()
    }

    pub fn metrics(&self) -> Arc<MetricsCollector> {
        self.metrics.clone()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Time a query, record its outcome and log failures
    fn observe<T>(&self, view: &str, query: impl FnOnce() -> Result<T>) -> Result<T> {
        let timer = self.metrics.start_timer();
        let result = query();
        let duration = timer.stop();

        self.metrics.record_query(view, result.is_ok(), duration);
        match &result {
            Ok(_) => debug!(
                "Served {} query in {:.3}ms",
                view,
                duration.as_secs_f64() * 1000.0
            ),
            Err(e) => {
                let client_error = e
                    .downcast_ref::<TournamentError>()
                    .is_some_and(TournamentError::is_client_error);
                if client_error {
                    debug!("Rejected {} query: {}", view, e);
                } else {
                    error!("Failed {} query: {:#}", view, e);
                }
            }
        }
        result
    }

    /// League table for a sport, recomputed from the current matches
    pub fn standings(&self, sport: Sport) -> Result<Vec<StandingRecord>> {
        self.observe("standings", || {
            if !sport.has_league_table() {
                return Err(TournamentError::UnsupportedSport {
                    sport,
                    view: "standings".to_string(),
                }
                .into());
            }

            let teams = self.storage.teams_by_sport(sport)?;
            let matches = self.storage.matches_by_sport(sport)?;

            let timer = self.metrics.start_timer();
            let (table, summary) = standings::compute_standings_with_summary(&teams, &matches);
            self.metrics
                .record_standings_calculation(sport, &summary, timer.stop());

            debug!(
                "Computed {} standings: {} teams, {} matches applied, {} skipped",
                sport,
                table.len(),
                summary.applied,
                summary.skipped()
            );
            Ok(table)
        })
    }

    /// Top scorers for a sport; `limit` falls back to the configured default
    pub fn top_scorers(&self, sport: Sport, limit: Option<usize>) -> Result<Vec<ScorerEntry>> {
        self.observe("top_scorers", || {
            let settings = &self.config.standings;
            let limit = clamp_limit(
                limit,
                settings.top_scorers_default_limit,
                settings.top_scorers_max_limit,
            );

            let players = self.storage.all_players()?;
            let teams = self.storage.all_teams()?;
            let matches = self.storage.matches_by_sport(sport)?;
            let stats = self.storage.all_player_stats()?;

            leaderboard::top_scorers(
                ScorerSources {
                    players: &players,
                    teams: &teams,
                    matches: &matches,
                    stats: &stats,
                },
                sport,
                limit,
            )
        })
    }

    /// Cheerleading placements in rank order
    pub fn cheerleading_rankings(&self) -> Result<Vec<RankingEntry>> {
        self.observe("cheerleading_rankings", || {
            let rankings = self.storage.cheerleading_rankings()?;
            let teams = self.storage.all_teams()?;
            Ok(leaderboard::ranking_table(&rankings, &teams))
        })
    }

    /// Teams, optionally restricted to one sport
    pub fn teams(&self, sport: Option<Sport>) -> Result<Vec<Team>> {
        self.observe("teams", || match sport {
            Some(sport) => self.storage.teams_by_sport(sport),
            None => self.storage.all_teams(),
        })
    }

    /// Players, optionally restricted to one team
    pub fn players(&self, team_id: Option<TeamId>) -> Result<Vec<Player>> {
        self.observe("players", || match team_id {
            Some(team_id) => self.storage.players_by_team(team_id),
            None => self.storage.all_players(),
        })
    }

    /// Matches in chronological order, optionally restricted to one sport
    pub fn matches(&self, sport: Option<Sport>) -> Result<Vec<Match>> {
        self.observe("matches", || {
            let mut matches = self.storage.all_matches()?;
            match sport {
                Some(sport) => Ok(schedule::matches_for_sport(&matches, sport)),
                None => {
                    schedule::sort_chronologically(&mut matches);
                    Ok(matches)
                }
            }
        })
    }

    /// Fixtures of a sport from now on
    pub fn upcoming_matches(&self, sport: Sport) -> Result<Vec<Match>> {
        self.upcoming_matches_at(sport, current_timestamp())
    }

    /// Fixtures of a sport at or after `now`
    pub fn upcoming_matches_at(&self, sport: Sport, now: DateTime<Utc>) -> Result<Vec<Match>> {
        self.observe("upcoming_matches", || {
            let matches = self.storage.matches_by_sport(sport)?;
            Ok(schedule::upcoming_matches(&matches, sport, now))
        })
    }

    /// Player statistics recorded for one match
    pub fn match_stats(&self, match_id: MatchId) -> Result<Vec<PlayerStat>> {
        self.observe("match_stats", || {
            if self.storage.get_match(match_id)?.is_none() {
                return Err(TournamentError::not_found("Match", match_id).into());
            }
            self.storage.stats_by_match(match_id)
        })
    }
}
