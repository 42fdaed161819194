//! Profile repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::user::model::UserProfile;

/// Repository for the durable user profile document.
///
/// Implementations must resolve absent or malformed stored data to `None`
/// on load; the caller substitutes the fallback default profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the stored profile, if any.
    async fn load(&self) -> Result<Option<UserProfile>>;

    /// Serializes and saves the full profile document.
    async fn save(&self, profile: &UserProfile) -> Result<()>;
}
