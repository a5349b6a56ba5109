//! Request handlers for the public read API

use crate::api::error::ApiError;
use crate::leaderboard::{RankingEntry, ScorerEntry};
use crate::service::{AppState, HealthCheck, HealthStatus};
use crate::standings::StandingRecord;
use crate::types::{Match, MatchId, Player, PlayerStat, Sport, Team, TeamId};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct SportFilter {
    pub sport: Option<Sport>,
}

#[derive(Debug, Deserialize)]
pub struct TeamFilter {
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParam {
    pub limit: Option<usize>,
}

/// Root endpoint handler - shows service information
pub async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "service": state.config().service.name,
        "version": crate::VERSION,
        "endpoints": [
            "/health",
            "/metrics",
            "/api/teams",
            "/api/players",
            "/api/matches",
            "/api/matches/{id}/stats",
            "/api/schedule/{sport}",
            "/api/standings/{sport}",
            "/api/top-scorers/{sport}",
            "/api/cheerleading/rankings"
        ]
    }))
}

/// Health check endpoint handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    debug!("Health check requested");

    match HealthCheck::check(&state) {
        Ok(health) => {
            let status = if health.status == HealthStatus::Unhealthy {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::OK
            };
            (status, Json(health)).into_response()
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy" })),
            )
                .into_response()
        }
    }
}

/// Prometheus metrics endpoint handler
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    debug!("Metrics endpoint requested");

    let metrics = state.metrics();
    metrics.update_uptime(state.uptime());

    let metric_families = metrics.registry().gather();
    let encoder = TextEncoder::new();

    match encoder.encode_to_string(&metric_families) {
        Ok(output) => (
            StatusCode::OK,
            [("content-type", encoder.format_type().to_string())],
            output,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode metrics".to_string(),
            )
                .into_response()
        }
    }
}

pub async fn teams_handler(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SportFilter>,
) -> ApiResult<Vec<Team>> {
    Ok(Json(state.teams(filter.sport)?))
}

pub async fn players_handler(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TeamFilter>,
) -> ApiResult<Vec<Player>> {
    Ok(Json(state.players(filter.team_id)?))
}

pub async fn matches_handler(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SportFilter>,
) -> ApiResult<Vec<Match>> {
    Ok(Json(state.matches(filter.sport)?))
}

pub async fn match_stats_handler(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<MatchId>,
) -> ApiResult<Vec<PlayerStat>> {
    Ok(Json(state.match_stats(match_id)?))
}

pub async fn schedule_handler(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<Sport>,
) -> ApiResult<Vec<Match>> {
    Ok(Json(state.upcoming_matches(sport)?))
}

pub async fn standings_handler(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<Sport>,
) -> ApiResult<Vec<StandingRecord>> {
    Ok(Json(state.standings(sport)?))
}

pub async fn top_scorers_handler(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<Sport>,
    Query(params): Query<LimitParam>,
) -> ApiResult<Vec<ScorerEntry>> {
    Ok(Json(state.top_scorers(sport, params.limit)?))
}

pub async fn rankings_handler(State(state): State<Arc<AppState>>) -> ApiResult<Vec<RankingEntry>> {
    Ok(Json(state.cheerleading_rankings()?))
}
