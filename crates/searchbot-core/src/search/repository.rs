//! History repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::search::model::HistoryRecord;

/// Repository for the durable search history document.
///
/// Implementations must treat absent or malformed stored data as an empty
/// collection on load; load never fails for recoverable storage problems.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the full history collection, most recent first.
    async fn load(&self) -> Result<Vec<HistoryRecord>>;

    /// Serializes and saves the full history collection (no delta writes).
    async fn save(&self, history: &[HistoryRecord]) -> Result<()>;
}
