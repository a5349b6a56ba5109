//! Public HTTP API
//!
//! Read-only JSON views over the tournament data served with axum, together
//! with the `/health` and `/metrics` endpoints. Writes go through the storage
//! API in-process; there is no admin surface over HTTP.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, ApiServer, ApiServerConfig};
