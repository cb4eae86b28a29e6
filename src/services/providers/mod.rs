/// Recommendation service abstraction
///
/// The controller only knows this trait. The production implementation talks HTTP
/// to the scoring service; tests substitute mocks or scripted providers.
use crate::{
    error::RecommendationResult,
    models::{ResultSet, UserId},
};

pub mod http;

pub use http::HttpRecommendationProvider;

/// Trait for recommendation sources
///
/// Implementations must map every transport, status and decoding problem into a
/// `RecommendationError`; they never retry on their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Fetch ranked recommendations for a user, in the order the service returns them
    async fn recommend(&self, user_id: UserId) -> RecommendationResult<ResultSet>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
