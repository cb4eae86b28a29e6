use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Category of a failed recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// User-supplied identifier was rejected before any request was made
    Validation,
    /// Network unreachable, timeout or connection reset
    Transport,
    /// Non-2xx status from the recommendation service
    Service,
    /// Response body was not a valid result set
    Decode,
}

/// Errors produced while resolving a selection into recommendations
#[derive(thiserror::Error, Debug)]
pub enum RecommendationError {
    #[error("Invalid user id: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Recommendation service returned status {status}: {detail}")]
    Service { status: StatusCode, detail: String },

    #[error("Failed to decode recommendations: {0}")]
    Decode(String),

    #[error("Recommendation request did not complete: {0}")]
    Interrupted(String),
}

impl RecommendationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RecommendationError::Validation(_) => FailureKind::Validation,
            RecommendationError::Transport(_) | RecommendationError::Interrupted(_) => {
                FailureKind::Transport
            }
            RecommendationError::Service { .. } => FailureKind::Service,
            RecommendationError::Decode(_) => FailureKind::Decode,
        }
    }

    /// Message shown to the user. Status codes and decode details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            FailureKind::Validation => "Please enter a valid positive user ID.",
            FailureKind::Transport => "Failed to load recommendations. Please try again.",
            FailureKind::Service | FailureKind::Decode => "User not found or server error",
        }
    }
}

impl From<serde_json::Error> for RecommendationError {
    fn from(err: serde_json::Error) -> Self {
        RecommendationError::Decode(err.to_string())
    }
}

pub type RecommendationResult<T> = Result<T, RecommendationError>;
