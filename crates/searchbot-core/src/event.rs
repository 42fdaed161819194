//! Committed state-transition events.
//!
//! Controllers publish one event per committed transition; the persistence
//! coordinator subscribes and maps each event to at most one save per
//! storage key. Transitions that the source of truth never persisted
//! (session resets, mark-failed, profile hydration) emit no event.

use serde::{Deserialize, Serialize};

/// A committed transition observed on one of the state controllers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateEvent {
    /// Stored history replaced the in-memory collection at startup.
    HistoryHydrated,
    /// A search reached `success` and appended a history record.
    SearchCompleted { estimated_time_minutes: u32 },
    /// A history record's favorite flag was toggled.
    FavoriteToggled { record_id: String },
    /// Onboarding was marked complete.
    OnboardingCompleted,
    /// Preferences were shallow-merged.
    PreferencesUpdated,
    /// Top-level profile fields were shallow-merged.
    ProfileUpdated,
    /// Usage metrics were incremented from a completed search.
    MetricsIncremented,
}

impl StateEvent {
    /// Whether this transition triggers a save of the history document.
    pub fn persists_history(&self) -> bool {
        matches!(
            self,
            Self::HistoryHydrated | Self::SearchCompleted { .. } | Self::FavoriteToggled { .. }
        )
    }

    /// Whether this transition triggers a save of the profile document.
    pub fn persists_profile(&self) -> bool {
        matches!(
            self,
            Self::OnboardingCompleted
                | Self::PreferencesUpdated
                | Self::ProfileUpdated
                | Self::MetricsIncremented
        )
    }
}
