//! Service layer for the tourney-standings service
//!
//! This module contains the main application state that answers the public
//! read views, and the health check built on top of it.

pub mod app;
pub mod health;

pub use app::AppState;
pub use health::{HealthCheck, HealthStatus};
