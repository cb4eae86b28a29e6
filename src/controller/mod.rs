/// Recommendation request controller
///
/// Turns a user action into exactly one request against the recommendation
/// provider and folds the outcome into a `Snapshot`. Requests are never queued or
/// cancelled: each one carries the generation that spawned it, and an outcome is
/// applied only while that generation is still current (last selection wins).
use std::sync::Arc;

use tokio::{
    sync::{watch, RwLock},
    task::JoinHandle,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::{RecommendationError, RecommendationResult},
    models::{Genre, ResultSet, Selection, UserId},
    services::providers::RecommendationProvider,
};

mod state;

pub use state::{Failure, RequestState, Snapshot};

/// How an in-flight request ended from the controller's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome became the current snapshot
    Applied,
    /// A newer selection was made first; the outcome was dropped
    Stale,
    /// The controller task itself died before resolving
    Lost,
}

/// Handle to a request started by a selection
///
/// Dropping the handle does not cancel the request.
#[derive(Debug)]
pub struct InFlight {
    generation: u64,
    request_id: Uuid,
    handle: JoinHandle<Completion>,
}

impl InFlight {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the response and reports whether it was applied
    pub async fn wait(self) -> Completion {
        match self.handle.await {
            Ok(completion) => completion,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    request_id = %self.request_id,
                    generation = self.generation,
                    "Recommendation task join error"
                );
                Completion::Lost
            }
        }
    }
}

/// Mutable core guarded by the controller lock
struct ControllerInner {
    generation: u64,
    snapshot: Snapshot,
}

#[derive(Clone)]
pub struct RecommendationController {
    provider: Arc<dyn RecommendationProvider>,
    inner: Arc<RwLock<ControllerInner>>,
    updates: Arc<watch::Sender<Snapshot>>,
}

impl RecommendationController {
    /// Creates an idle controller backed by the given provider
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        let (updates, _) = watch::channel(Snapshot::default());
        Self {
            provider,
            inner: Arc::new(RwLock::new(ControllerInner {
                generation: 0,
                snapshot: Snapshot::default(),
            })),
            updates: Arc::new(updates),
        }
    }

    /// Requests recommendations for a genre shortcut
    pub async fn select_genre(&self, genre: Genre) -> InFlight {
        self.start(Selection::Genre(genre)).await
    }

    /// Requests recommendations for a raw user id typed by the user
    ///
    /// Invalid input never reaches the provider: the snapshot becomes a
    /// validation failure and `None` is returned.
    pub async fn select_user(&self, input: &str) -> Option<InFlight> {
        match UserId::parse(input) {
            Ok(user_id) => Some(self.start(Selection::User(user_id)).await),
            Err(err) => {
                self.reject(err).await;
                None
            }
        }
    }

    /// Read-only copy of the current selection and request state
    pub async fn current_state(&self) -> Snapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Receiver notified after every transition
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    async fn start(&self, selection: Selection) -> InFlight {
        let request_id = Uuid::new_v4();
        let user_id = selection.user_id();

        let generation = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            self.commit(&mut inner, Snapshot::loading(selection));
            inner.generation
        };

        let span = tracing::info_span!(
            "recommendation_request",
            request_id = %request_id,
            generation = generation,
            user_id = %user_id,
            provider = self.provider.name()
        );
        span.in_scope(|| tracing::info!(selection = %selection, "Requesting recommendations"));

        let controller = self.clone();
        let handle = tokio::spawn(
            async move {
                let outcome = controller.fetch(user_id).await;
                controller.finish(generation, selection, outcome).await
            }
            .instrument(span),
        );

        InFlight {
            generation,
            request_id,
            handle,
        }
    }

    /// Runs the provider call in its own task so a panic becomes a `Failure`
    async fn fetch(&self, user_id: UserId) -> RecommendationResult<ResultSet> {
        let provider = Arc::clone(&self.provider);
        let task = tokio::spawn(
            async move { provider.recommend(user_id).await }.in_current_span(),
        );

        match task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => Err(RecommendationError::Interrupted(
                "provider panicked".to_string(),
            )),
            Err(e) => Err(RecommendationError::Interrupted(e.to_string())),
        }
    }

    async fn finish(
        &self,
        generation: u64,
        selection: Selection,
        outcome: RecommendationResult<ResultSet>,
    ) -> Completion {
        let state = match outcome {
            Ok(results) => RequestState::Success(results),
            Err(err) => {
                log_failure(&err);
                RequestState::Failure(Failure::from(&err))
            }
        };

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!(
                current_generation = inner.generation,
                "Discarding stale recommendation response"
            );
            return Completion::Stale;
        }

        if let RequestState::Success(results) = &state {
            tracing::info!(results = results.len(), "Recommendations applied");
        }
        self.commit(&mut inner, Snapshot::resolved(selection, state));
        Completion::Applied
    }

    async fn reject(&self, err: RecommendationError) {
        log_failure(&err);
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        self.commit(&mut inner, Snapshot::rejected(&err));
    }

    /// Replaces the snapshot and notifies subscribers while the lock is held
    fn commit(&self, inner: &mut ControllerInner, snapshot: Snapshot) {
        inner.snapshot = snapshot.clone();
        self.updates.send_replace(snapshot);
    }
}

fn log_failure(err: &RecommendationError) {
    match err {
        RecommendationError::Validation(reason) => {
            tracing::warn!(error_kind = ?err.kind(), reason = %reason, "Rejected user id");
        }
        RecommendationError::Transport(e) => {
            tracing::error!(
                error_kind = ?err.kind(),
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "Recommendation service unreachable"
            );
        }
        RecommendationError::Service { status, detail } => {
            tracing::error!(
                error_kind = ?err.kind(),
                status = status.as_u16(),
                detail = %detail,
                "Recommendation service returned an error status"
            );
        }
        RecommendationError::Decode(reason) => {
            tracing::error!(
                error_kind = ?err.kind(),
                reason = %reason,
                "Failed to decode recommendation response"
            );
        }
        RecommendationError::Interrupted(reason) => {
            tracing::error!(
                error_kind = ?err.kind(),
                reason = %reason,
                "Recommendation request task failed"
            );
        }
    }
}
