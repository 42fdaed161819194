//! Profile controller.
//!
//! Owns the single user profile instance. All operations are synchronous
//! transforms; persistence happens downstream via the coordinator.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use searchbot_core::error::Result;
use searchbot_core::event::StateEvent;
use searchbot_core::user::{
    PreferencesUpdate, ProfileRepository, ProfileUpdate, UserProfile,
};

/// Owns the profile slice: identity, preferences, usage metrics, and the
/// onboarding flag.
pub struct ProfileController {
    profile: Arc<Mutex<UserProfile>>,
    profile_repository: Arc<dyn ProfileRepository>,
    events: UnboundedSender<StateEvent>,
}

impl ProfileController {
    /// Creates the controller holding the fallback default profile until
    /// [`hydrate`](Self::hydrate) replaces it.
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        events: UnboundedSender<StateEvent>,
    ) -> Self {
        Self {
            profile: Arc::new(Mutex::new(UserProfile::default())),
            profile_repository,
            events,
        }
    }

    /// Loads the stored profile, falling back to the default on first run
    /// or corrupt storage. Hydration is not a persistence trigger.
    pub async fn hydrate(&self) -> Result<()> {
        let stored = self.profile_repository.load().await?;
        let mut profile = self.profile.lock().await;
        *profile = stored.unwrap_or_default();
        Ok(())
    }

    /// Marks onboarding complete. Idempotent.
    pub async fn complete_onboarding(&self) {
        {
            let mut profile = self.profile.lock().await;
            profile.onboarding_complete = true;
        }
        self.emit(StateEvent::OnboardingCompleted);
    }

    /// Shallow-merges a preferences update.
    pub async fn update_preferences(&self, update: PreferencesUpdate) {
        {
            let mut profile = self.profile.lock().await;
            profile.apply_preferences(update);
        }
        self.emit(StateEvent::PreferencesUpdated);
    }

    /// Shallow-merges top-level profile fields (name, email, plan, avatar).
    pub async fn update_profile(&self, update: ProfileUpdate) {
        {
            let mut profile = self.profile.lock().await;
            profile.apply_update(update);
        }
        self.emit(StateEvent::ProfileUpdated);
    }

    /// Applies the metric increment derived from one completed search.
    pub async fn increment_metrics(&self, minutes_saved: u32) {
        {
            let mut profile = self.profile.lock().await;
            profile.record_search(minutes_saved);
        }
        self.emit(StateEvent::MetricsIncremented);
    }

    /// Snapshot of the profile slice.
    pub async fn profile(&self) -> UserProfile {
        self.profile.lock().await.clone()
    }

    fn emit(&self, event: StateEvent) {
        if self.events.send(event).is_err() {
            tracing::warn!("state event dropped: persistence coordinator is not listening");
        }
    }
}
