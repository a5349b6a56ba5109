//! Metrics collection using Prometheus
//!
//! This module provides metrics collection for the tourney-standings service
//! using Prometheus metrics.

use crate::standings::ReductionSummary;
use crate::types::Sport;
use anyhow::Result;
use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the tournament service
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Service-level metrics
    service_metrics: ServiceMetrics,

    /// Standings engine metrics
    standings_metrics: StandingsMetrics,

    /// Read view metrics
    query_metrics: QueryMetrics,
}

/// Service-level metrics
#[derive(Clone)]
pub struct ServiceMetrics {
    /// Service uptime in seconds
    pub uptime_seconds: IntGauge,

    /// Health check status (0=unhealthy, 1=degraded, 2=healthy)
    pub health_status: IntGauge,

    /// Component health status
    pub component_health: IntGaugeVec,
}

/// Standings engine metrics
#[derive(Clone)]
pub struct StandingsMetrics {
    /// Total league tables computed
    pub calculations_total: IntCounterVec,

    /// Matches that contributed to a table
    pub matches_applied_total: IntCounterVec,

    /// Matches left out of a table, by reason
    pub matches_skipped_total: IntCounterVec,

    /// Time spent reducing and sorting
    pub calculation_duration: HistogramVec,
}

/// Read view metrics
#[derive(Clone)]
pub struct QueryMetrics {
    /// Total queries served per view
    pub queries_total: IntCounterVec,

    /// Failed queries per view
    pub query_errors_total: IntCounterVec,

    /// End-to-end query duration including storage reads
    pub query_duration: HistogramVec,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let service_metrics = ServiceMetrics::new(&registry)?;
        let standings_metrics = StandingsMetrics::new(&registry)?;
        let query_metrics = QueryMetrics::new(&registry)?;

        Ok(Self {
            registry,
            service_metrics,
            standings_metrics,
            query_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get service metrics
    pub fn service(&self) -> &ServiceMetrics {
        &self.service_metrics
    }

    /// Get standings metrics
    pub fn standings(&self) -> &StandingsMetrics {
        &self.standings_metrics
    }

    /// Get query metrics
    pub fn queries(&self) -> &QueryMetrics {
        &self.query_metrics
    }

    /// Record one league table computation
    pub fn record_standings_calculation(
        &self,
        sport: Sport,
        summary: &ReductionSummary,
        duration: Duration,
    ) {
        let sport = sport.as_str();

        self.standings_metrics
            .calculations_total
            .with_label_values(&[sport])
            .inc();

        self.standings_metrics
            .matches_applied_total
            .with_label_values(&[sport])
            .inc_by(summary.applied as u64);

        for (reason, count) in [
            ("not_final", summary.not_final),
            ("missing_score", summary.missing_score),
            ("unknown_team", summary.unknown_team),
        ] {
            if count > 0 {
                self.standings_metrics
                    .matches_skipped_total
                    .with_label_values(&[sport, reason])
                    .inc_by(count as u64);
            }
        }

        self.standings_metrics
            .calculation_duration
            .with_label_values(&[sport])
            .observe(duration.as_secs_f64());
    }

    /// Record a served query
    pub fn record_query(&self, view: &str, success: bool, duration: Duration) {
        self.query_metrics
            .queries_total
            .with_label_values(&[view])
            .inc();

        if !success {
            self.query_metrics
                .query_errors_total
                .with_label_values(&[view])
                .inc();
        }

        self.query_metrics
            .query_duration
            .with_label_values(&[view])
            .observe(duration.as_secs_f64());
    }

    /// Update overall health status
    pub fn update_health_status(&self, status: u8) {
        self.service_metrics.health_status.set(status as i64);
    }

    /// Update component health
    pub fn update_component_health(&self, component: &str, healthy: bool) {
        let status = if healthy { 1 } else { 0 };
        self.service_metrics
            .component_health
            .with_label_values(&[component])
            .set(status);
    }

    /// Update the uptime gauge
    pub fn update_uptime(&self, uptime: Duration) {
        self.service_metrics
            .uptime_seconds
            .set(uptime.as_secs() as i64);
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl ServiceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let uptime_seconds = IntGauge::new(
            "tourney_standings_uptime_seconds",
            "Service uptime in seconds",
        )?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        let health_status = IntGauge::new(
            "tourney_standings_health_status",
            "Health status (0=unhealthy, 1=degraded, 2=healthy)",
        )?;
        registry.register(Box::new(health_status.clone()))?;

        let component_health = IntGaugeVec::new(
            Opts::new(
                "tourney_standings_component_health",
                "Component health status",
            ),
            &["component"],
        )?;
        registry.register(Box::new(component_health.clone()))?;

        Ok(Self {
            uptime_seconds,
            health_status,
            component_health,
        })
    }
}

impl StandingsMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let calculations_total = IntCounterVec::new(
            Opts::new(
                "tourney_standings_calculations_total",
                "Total league tables computed",
            ),
            &["sport"],
        )?;
        registry.register(Box::new(calculations_total.clone()))?;

        let matches_applied_total = IntCounterVec::new(
            Opts::new(
                "tourney_standings_matches_applied_total",
                "Matches that contributed to a league table",
            ),
            &["sport"],
        )?;
        registry.register(Box::new(matches_applied_total.clone()))?;

        let matches_skipped_total = IntCounterVec::new(
            Opts::new(
                "tourney_standings_matches_skipped_total",
                "Matches left out of a league table",
            ),
            &["sport", "reason"],
        )?;
        registry.register(Box::new(matches_skipped_total.clone()))?;

        let calculation_duration = HistogramVec::new(
            HistogramOpts::new(
                "tourney_standings_calculation_duration_seconds",
                "Time spent computing a league table",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1]),
            &["sport"],
        )?;
        registry.register(Box::new(calculation_duration.clone()))?;

        Ok(Self {
            calculations_total,
            matches_applied_total,
            matches_skipped_total,
            calculation_duration,
        })
    }
}

impl QueryMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let queries_total = IntCounterVec::new(
            Opts::new("tourney_standings_queries_total", "Total queries served"),
            &["view"],
        )?;
        registry.register(Box::new(queries_total.clone()))?;

        let query_errors_total = IntCounterVec::new(
            Opts::new("tourney_standings_query_errors_total", "Total failed queries"),
            &["view"],
        )?;
        registry.register(Box::new(query_errors_total.clone()))?;

        let query_duration = HistogramVec::new(
            HistogramOpts::new(
                "tourney_standings_query_duration_seconds",
                "Query duration including storage reads",
            )
            .buckets(vec![0.0001, 0.001, 0.01, 0.1, 1.0]),
            &["view"],
        )?;
        registry.register(Box::new(query_duration.clone()))?;

        Ok(Self {
            queries_total,
            query_errors_total,
            query_duration,
        })
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create default metrics collector")
    }
}
