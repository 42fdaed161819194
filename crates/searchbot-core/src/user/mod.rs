//! User profile domain: model, partial updates, and the repository seam.

pub mod model;
pub mod repository;

pub use model::{PlanTier, Preferences, PreferencesUpdate, ProfileUpdate, UsageMetrics, UserProfile};
pub use repository::ProfileRepository;
