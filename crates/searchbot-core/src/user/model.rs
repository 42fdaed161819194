//! UserProfile domain model.
//!
//! Exactly one profile exists per installation. `Default` produces the
//! first-run fallback used until a stored profile is hydrated.

use serde::{Deserialize, Serialize};

/// Subscription tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Premium,
}

/// User-facing toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications: bool,
    pub share_anonymized_data: bool,
}

/// Usage counters derived from completed searches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub searches_completed: u32,
    pub minutes_saved: u32,
    pub satisfaction_score: u8,
}

/// The single per-installation user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: PlanTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub preferences: Preferences,
    pub metrics: UsageMetrics,
    pub onboarding_complete: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Busy Alex".to_string(),
            email: "alex@searchbot.app".to_string(),
            plan: PlanTier::Free,
            avatar_url: None,
            preferences: Preferences {
                notifications: true,
                share_anonymized_data: false,
            },
            metrics: UsageMetrics {
                searches_completed: 0,
                minutes_saved: 0,
                satisfaction_score: 92,
            },
            onboarding_complete: false,
        }
    }
}

/// Partial update for [`Preferences`]; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_anonymized_data: Option<bool>,
}

/// Partial update for top-level profile fields; `None` fields are left
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Shallow-merges a preferences update.
    pub fn apply_preferences(&mut self, update: PreferencesUpdate) {
        if let Some(notifications) = update.notifications {
            self.preferences.notifications = notifications;
        }
        if let Some(share) = update.share_anonymized_data {
            self.preferences.share_anonymized_data = share;
        }
    }

    /// Shallow-merges a top-level profile update.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(plan) = update.plan {
            self.plan = plan;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
    }

    /// Applies the metric increment derived from one completed search.
    pub fn record_search(&mut self, minutes_saved: u32) {
        self.metrics.searches_completed += 1;
        self.metrics.minutes_saved += minutes_saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "Busy Alex");
        assert_eq!(profile.plan, PlanTier::Free);
        assert!(profile.preferences.notifications);
        assert!(!profile.preferences.share_anonymized_data);
        assert_eq!(profile.metrics.searches_completed, 0);
        assert_eq!(profile.metrics.satisfaction_score, 92);
        assert!(!profile.onboarding_complete);
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_apply_preferences_is_partial() {
        let mut profile = UserProfile::default();
        profile.apply_preferences(PreferencesUpdate {
            notifications: Some(false),
            share_anonymized_data: None,
        });
        assert!(!profile.preferences.notifications);
        // untouched field keeps its value
        assert!(!profile.preferences.share_anonymized_data);
    }

    #[test]
    fn test_apply_update_merges_top_level_fields() {
        let mut profile = UserProfile::default();
        profile.apply_update(ProfileUpdate {
            name: Some("Jordan".to_string()),
            plan: Some(PlanTier::Premium),
            ..Default::default()
        });
        assert_eq!(profile.name, "Jordan");
        assert_eq!(profile.plan, PlanTier::Premium);
        assert_eq!(profile.email, "alex@searchbot.app");
    }

    #[test]
    fn test_record_search_accumulates() {
        let mut profile = UserProfile::default();
        profile.record_search(25);
        profile.record_search(60);
        assert_eq!(profile.metrics.searches_completed, 2);
        assert_eq!(profile.metrics.minutes_saved, 85);
    }
}
