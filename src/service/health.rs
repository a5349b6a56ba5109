//! Health checks
//!
//! This module provides health check functionality for the tourney-standings
//! service: a storage probe plus a summary of what is loaded.

use crate::service::app::AppState;
use crate::types::Sport;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Health check status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Gauge value exported to Prometheus
    pub fn as_gauge(&self) -> u8 {
        match self {
            HealthStatus::Healthy => 2,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 0,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "✅ healthy"),
            HealthStatus::Degraded => write!(f, "⚠️  degraded"),
            HealthStatus::Unhealthy => write!(f, "❌ unhealthy"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Detailed component checks
    pub checks: Vec<ComponentCheck>,
    pub stats: ServiceStats,
}

/// Individual component health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCheck {
    pub name: String,
    pub status: HealthStatus,
    /// Optional error message if unhealthy
    pub message: Option<String>,
    /// Check duration in milliseconds
    pub duration_ms: u64,
}

/// What the store currently holds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceStats {
    pub soccer_teams: usize,
    pub basketball_teams: usize,
    pub cheerleading_teams: usize,
    pub matches: usize,
    pub uptime_seconds: u64,
}

impl HealthCheck {
    /// Perform a health check of the service
    pub fn check(app_state: &Arc<AppState>) -> Result<Self> {
        let start = std::time::Instant::now();

        let (storage_status, message, stats) = match Self::gather_stats(app_state) {
            Ok(stats) => (HealthStatus::Healthy, None, stats),
            Err(e) => {
                error!("Storage health probe failed: {}", e);
                (
                    HealthStatus::Unhealthy,
                    Some(format!("Storage probe failed: {}", e)),
                    ServiceStats::default(),
                )
            }
        };

        let checks = vec![ComponentCheck {
            name: "storage".to_string(),
            status: storage_status,
            message,
            duration_ms: start.elapsed().as_millis() as u64,
        }];

        let metrics = app_state.metrics();
        metrics.update_component_health("storage", storage_status == HealthStatus::Healthy);
        metrics.update_health_status(storage_status.as_gauge());
        metrics.update_uptime(app_state.uptime());

        Ok(HealthCheck {
            status: storage_status,
            service: app_state.config().service.name.clone(),
            version: crate::VERSION.to_string(),
            timestamp: chrono::Utc::now(),
            checks,
            stats: ServiceStats {
                uptime_seconds: app_state.uptime().as_secs(),
                ..stats
            },
        })
    }

    fn gather_stats(app_state: &AppState) -> Result<ServiceStats> {
        let storage = app_state.storage();
        Ok(ServiceStats {
            soccer_teams: storage.teams_by_sport(Sport::Soccer)?.len(),
            basketball_teams: storage.teams_by_sport(Sport::Basketball)?.len(),
            cheerleading_teams: storage.teams_by_sport(Sport::Cheerleading)?.len(),
            matches: storage.all_matches()?.len(),
            uptime_seconds: 0,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize health check: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::TournamentError;
    use crate::metrics::MetricsCollector;
    use crate::storage::{InMemoryTournamentStorage, MockTournamentStorage, NewTeam, TournamentStorage};

    #[test]
    fn test_healthy_with_in_memory_storage() {
        let storage = InMemoryTournamentStorage::new();
        storage
            .create_team(NewTeam {
                name: "Flyers".to_string(),
                sport: Sport::Cheerleading,
                logo_url: None,
            })
            .unwrap();

        let state = Arc::new(AppState::new(
            AppConfig::default(),
            Arc::new(storage),
            Arc::new(MetricsCollector::new().unwrap()),
        ));

        let health = HealthCheck::check(&state).unwrap();
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.stats.cheerleading_teams, 1);
        assert_eq!(health.service, "tourney-standings");
        assert!(health.to_json().unwrap().contains("\"healthy\""));
        assert_eq!(state.metrics().service().health_status.get(), 2);
    }

    #[test]
    fn test_unhealthy_when_storage_fails() {
        let mut storage = MockTournamentStorage::new();
        storage.expect_teams_by_sport().returning(|_| {
            Err(TournamentError::Internal {
                message: "Failed to acquire storage read lock".to_string(),
            }
            .into())
        });

        let state = Arc::new(AppState::new(
            AppConfig::default(),
            Arc::new(storage),
            Arc::new(MetricsCollector::new().unwrap()),
        ));

        let health = HealthCheck::check(&state).unwrap();
        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert!(health.checks[0].message.is_some());
        assert_eq!(state.metrics().service().health_status.get(), 0);
    }
}
