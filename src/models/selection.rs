use std::{fmt::Display, num::NonZeroU64};

use super::Genre;
use crate::error::{RecommendationError, RecommendationResult};

/// Positive user identifier understood by the recommendation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(NonZeroU64);

impl UserId {
    /// Parses user input as a strictly positive base-10 integer
    pub fn parse(input: &str) -> RecommendationResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RecommendationError::Validation(
                "user id cannot be empty".to_string(),
            ));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecommendationError::Validation(format!(
                "'{}' is not a positive integer",
                trimmed
            )));
        }

        trimmed
            .parse::<u64>()
            .ok()
            .and_then(NonZeroU64::new)
            .map(UserId)
            .ok_or_else(|| {
                RecommendationError::Validation(format!("'{}' is out of range", trimmed))
            })
    }

    /// Builds a user id from a constant known to be positive
    pub(crate) const fn new_unchecked(raw: u64) -> Self {
        match NonZeroU64::new(raw) {
            Some(id) => UserId(id),
            None => panic!("user id must be positive"),
        }
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user asked recommendations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Genre(Genre),
    User(UserId),
}

impl Selection {
    /// The `user_id` query parameter for this selection
    pub fn user_id(&self) -> UserId {
        match self {
            Selection::Genre(genre) => genre.user_id(),
            Selection::User(id) => *id,
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Genre(genre) => write!(f, "{}", genre),
            Selection::User(id) => write!(f, "user {}", id),
        }
    }
}
