//! Search resolver trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::search::model::{SearchRequest, SearchResult};

/// Turns a normalized search request into a result payload.
///
/// The production implementation resolves live against the research backend
/// and degrades to a locally generated result on any transport failure, so
/// under normal operation it never returns an error. The error path exists
/// for resolvers that genuinely cannot fall back; the lifecycle controller
/// maps it to the session `error` state.
#[async_trait]
pub trait SearchResolver: Send + Sync {
    async fn resolve(&self, request: &SearchRequest) -> Result<SearchResult>;
}
