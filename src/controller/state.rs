use crate::{
    error::{FailureKind, RecommendationError},
    models::{ResultSet, Selection},
};

/// Why the last request produced no results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    /// User-presentable text, never empty
    pub message: String,
}

impl From<&RecommendationError> for Failure {
    fn from(err: &RecommendationError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message().to_string(),
        }
    }
}

/// Lifecycle of the request for the current selection
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ResultSet),
    Failure(Failure),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            RequestState::Success(results) => Some(results),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestState::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Immutable view of the controller, replaced wholesale on every transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub selection: Option<Selection>,
    pub state: RequestState,
}

impl Snapshot {
    pub(crate) fn loading(selection: Selection) -> Self {
        Self {
            selection: Some(selection),
            state: RequestState::Loading,
        }
    }

    pub(crate) fn resolved(selection: Selection, state: RequestState) -> Self {
        Self {
            selection: Some(selection),
            state,
        }
    }

    /// Rejected input is not a selection, so none is recorded
    pub(crate) fn rejected(err: &RecommendationError) -> Self {
        Self {
            selection: None,
            state: RequestState::Failure(Failure::from(err)),
        }
    }
}
