//! Persistence coordinator.
//!
//! An observer subscribed to the controllers' transition events. Each event
//! fires its matching rules at most once:
//!
//! | event | action |
//! |---|---|
//! | `HistoryHydrated`, `SearchCompleted`, `FavoriteToggled` | save the history snapshot |
//! | `OnboardingCompleted`, `PreferencesUpdated`, `ProfileUpdated`, `MetricsIncremented` | save the profile snapshot |
//! | `SearchCompleted` | increment usage metrics with the result's estimated minutes |
//!
//! Durability is best-effort: a failed write is logged and the in-memory
//! state stays authoritative. No ordering is guaranteed between writes to
//! the two storage keys.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use searchbot_core::event::StateEvent;
use searchbot_core::search::HistoryRepository;
use searchbot_core::user::ProfileRepository;

use crate::profile_controller::ProfileController;
use crate::search_controller::SearchController;

/// Maps committed state transitions to durable-storage writes.
pub struct PersistenceCoordinator {
    search: Arc<SearchController>,
    profile: Arc<ProfileController>,
    history_repository: Arc<dyn HistoryRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl PersistenceCoordinator {
    pub fn new(
        search: Arc<SearchController>,
        profile: Arc<ProfileController>,
        history_repository: Arc<dyn HistoryRepository>,
        profile_repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            search,
            profile,
            history_repository,
            profile_repository,
        }
    }

    /// Starts the observer loop on its own task. Controllers never wait on
    /// persistence; the loop drains events until every sender is dropped.
    pub fn spawn(self, events: UnboundedReceiver<StateEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    async fn run(self, mut events: UnboundedReceiver<StateEvent>) {
        while let Some(event) = events.recv().await {
            self.apply(&event).await;
        }
        tracing::debug!("state event channel closed, persistence coordinator stopping");
    }

    /// Applies the rules for a single transition event. Public so tests can
    /// drive the rule table deterministically; the spawned loop calls this
    /// for every received event.
    pub async fn apply(&self, event: &StateEvent) {
        if event.persists_history() {
            let history = self.search.history().await;
            if let Err(err) = self.history_repository.save(&history).await {
                tracing::warn!("failed to persist search history: {}", err);
            }
        }

        if event.persists_profile() {
            let profile = self.profile.profile().await;
            if let Err(err) = self.profile_repository.save(&profile).await {
                tracing::warn!("failed to persist user profile: {}", err);
            }
        }

        if let StateEvent::SearchCompleted {
            estimated_time_minutes,
        } = event
        {
            // Feeds a MetricsIncremented event back through the channel,
            // which persists the updated profile on its own turn.
            self.profile.increment_metrics(*estimated_time_minutes).await;
        }
    }
}
