//! Metrics and monitoring for the tourney-standings service
//!
//! This module provides Prometheus metrics collection for the standings
//! engine and the read views served over HTTP.

pub mod collector;

pub use collector::{MetricsCollector, MetricsTimer, QueryMetrics, ServiceMetrics, StandingsMetrics};
