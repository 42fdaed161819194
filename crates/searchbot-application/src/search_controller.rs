//! Request lifecycle controller.
//!
//! Owns the single in-flight search session and the in-memory history
//! collection. Every committed transition that the persistence coordinator
//! cares about is published as a [`StateEvent`]; the controller itself never
//! writes to storage.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use searchbot_core::error::{Result, SearchbotError};
use searchbot_core::event::StateEvent;
use searchbot_core::search::{
    HISTORY_CAPACITY, HistoryRecord, HistoryRepository, RecordStatus, SearchInput, SearchRequest,
    SearchResolver, SearchResult, SearchSessionState,
};

/// The slice of state owned exclusively by this controller.
#[derive(Debug, Default)]
struct SearchSlice {
    session: SearchSessionState,
    history: Vec<HistoryRecord>,
}

/// Drives the `idle -> processing -> success|error` state machine and the
/// append-only history collection.
pub struct SearchController {
    state: Arc<Mutex<SearchSlice>>,
    resolver: Arc<dyn SearchResolver>,
    history_repository: Arc<dyn HistoryRepository>,
    events: UnboundedSender<StateEvent>,
}

impl SearchController {
    pub fn new(
        resolver: Arc<dyn SearchResolver>,
        history_repository: Arc<dyn HistoryRepository>,
        events: UnboundedSender<StateEvent>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SearchSlice::default())),
            resolver,
            history_repository,
            events,
        }
    }

    /// Submits a pre-validated search input.
    ///
    /// Enters `processing`, awaits the resolver with no lock held, and on
    /// success appends a completed history record (evicting beyond the
    /// 50-record cap) before publishing [`StateEvent::SearchCompleted`].
    /// A resolver error moves the session to `error` and leaves history
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`SearchbotError::SearchInProgress`] if another search is still
    /// processing; the in-flight request is left untouched.
    pub async fn submit(&self, input: SearchInput) -> Result<SearchResult> {
        let request = {
            let mut state = self.state.lock().await;
            if state.session.is_processing() {
                return Err(SearchbotError::SearchInProgress);
            }
            let request = SearchRequest::new(input);
            state.session.begin(request.clone());
            request
        };

        tracing::debug!("search {} entered processing", request.id);

        match self.resolver.resolve(&request).await {
            Ok(result) => {
                {
                    let mut state = self.state.lock().await;
                    state.session.succeed(result.clone());
                    state
                        .history
                        .insert(0, HistoryRecord::completed(request, result.clone()));
                    state.history.truncate(HISTORY_CAPACITY);
                }
                self.emit(StateEvent::SearchCompleted {
                    estimated_time_minutes: result.estimated_time_minutes,
                });
                Ok(result)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.session.fail(err.to_string());
                tracing::warn!("search {} failed: {}", request.id, err);
                Err(err)
            }
        }
    }

    /// Replaces the in-memory history with the stored collection. Called at
    /// startup; absent or corrupt storage hydrates to an empty collection.
    pub async fn hydrate_history(&self) -> Result<()> {
        let stored = self.history_repository.load().await?;
        {
            let mut state = self.state.lock().await;
            state.history = stored;
        }
        self.emit(StateEvent::HistoryHydrated);
        Ok(())
    }

    /// Flips the favorite flag of the matching record. The collection is
    /// unchanged for an unknown id, but the transition is still published.
    pub async fn toggle_favorite(&self, record_id: &str) {
        {
            let mut state = self.state.lock().await;
            if let Some(record) = state.history.iter_mut().find(|r| r.id == record_id) {
                record.favorite = !record.favorite;
            }
        }
        self.emit(StateEvent::FavoriteToggled {
            record_id: record_id.to_string(),
        });
    }

    /// Marks a history record failed, clearing its result and recording the
    /// message on session state. Not a persistence trigger.
    pub async fn mark_failed(&self, record_id: &str, error_message: &str) {
        let mut state = self.state.lock().await;
        if let Some(record) = state.history.iter_mut().find(|r| r.id == record_id) {
            record.status = RecordStatus::Failed;
            record.result = None;
        }
        state.session.error_message = Some(error_message.to_string());
    }

    /// Resets the session slice to `idle`, clearing request, result, and
    /// error.
    pub async fn clear_current_result(&self) {
        let mut state = self.state.lock().await;
        state.session.reset();
    }

    /// Snapshot of the in-flight session slice.
    pub async fn session(&self) -> SearchSessionState {
        self.state.lock().await.session.clone()
    }

    /// Snapshot of the history collection, most recent first.
    pub async fn history(&self) -> Vec<HistoryRecord> {
        self.state.lock().await.history.clone()
    }

    fn emit(&self, event: StateEvent) {
        if self.events.send(event).is_err() {
            tracing::warn!("state event dropped: persistence coordinator is not listening");
        }
    }
}
