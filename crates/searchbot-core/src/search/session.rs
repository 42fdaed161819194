//! Ephemeral session state for the single in-flight search.
//!
//! This slice is never persisted; the durable history collection is the
//! [`super::model::HistoryRecord`] list.

use serde::{Deserialize, Serialize};

use super::model::{SearchRequest, SearchResult};

/// Status of the in-flight search session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

/// The in-flight search slice: current request/result plus status.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchSessionState {
    pub current_request: Option<SearchRequest>,
    pub current_result: Option<SearchResult>,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SearchSessionState {
    /// `idle|success|error -> processing`: stores the new request and clears
    /// any prior result or error.
    pub fn begin(&mut self, request: SearchRequest) {
        self.current_request = Some(request);
        self.current_result = None;
        self.error_message = None;
        self.status = SessionStatus::Processing;
    }

    /// `processing -> success`: stores the resolved result.
    pub fn succeed(&mut self, result: SearchResult) {
        self.current_result = Some(result);
        self.status = SessionStatus::Success;
    }

    /// `processing -> error`: records a human-readable message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.status = SessionStatus::Error;
    }

    /// Any state `-> idle`: clears request, result, and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_processing(&self) -> bool {
        self.status == SessionStatus::Processing
    }
}
