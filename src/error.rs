//! Error types for the tournament service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

use crate::types::Sport;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tournament scenarios
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("Sport {sport} does not support {view}")]
    UnsupportedSport { sport: Sport, view: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: u32 },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal service error: {message}")]
    Internal { message: String },
}

impl TournamentError {
    pub fn not_found(entity: &str, id: u32) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedSport { .. } | Self::InvalidInput { .. } | Self::NotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TournamentError::UnsupportedSport {
            sport: Sport::Cheerleading,
            view: "standings".to_string(),
        };
        assert_eq!(err.to_string(), "Sport cheerleading does not support standings");

        let err = TournamentError::not_found("Match", 42);
        assert_eq!(err.to_string(), "Match not found: 42");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(TournamentError::invalid_input("empty name").is_client_error());
        assert!(TournamentError::not_found("Team", 1).is_client_error());
        assert!(!TournamentError::Internal {
            message: "lock poisoned".to_string()
        }
        .is_client_error());
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = TournamentError::not_found("Team", 7).into();
        let inner = err.downcast_ref::<TournamentError>().unwrap();
        assert!(matches!(inner, TournamentError::NotFound { id: 7, .. }));
    }
}
