pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod services;

pub use controller::{Completion, InFlight, RecommendationController, RequestState, Snapshot};
pub use error::{FailureKind, RecommendationError, RecommendationResult};
