//! Search domain models.
//!
//! The serialized field names follow the wire format of the research backend
//! (camelCase), which is also the format of the durable history documents.

use serde::{Deserialize, Serialize};

use crate::language::detect_language;

/// Maximum number of records kept in the search history. Oldest entries are
/// evicted when the cap is exceeded.
pub const HISTORY_CAPACITY: usize = 50;

/// Urgency declared by the user at submission time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Urgent,
    Normal,
    Low,
}

/// Difficulty estimate attached to a research result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

/// Pre-validated submission payload handed to the lifecycle controller.
///
/// Validation (trimmed description length >= 12) is the caller's
/// responsibility; see [`crate::options::is_valid_description`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    pub description: String,
    pub category: String,
    pub priority: PriorityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_transcript: Option<String>,
    /// ISO 639-1 language code. Detected from the description when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A normalized search request. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Process-unique identifier generated at submission time.
    pub id: String,
    pub description: String,
    pub category: String,
    pub priority: PriorityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_transcript: Option<String>,
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Submission instant, RFC3339.
    pub created_at: String,
}

impl SearchRequest {
    /// Builds a request from a pre-validated input: fresh UUID id, current
    /// timestamp, and language autofilled from the description when the
    /// caller did not supply one.
    pub fn new(input: SearchInput) -> Self {
        let language = input
            .language
            .or_else(|| Some(detect_language(&input.description).to_string()));

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: input.description,
            category: input.category,
            priority: input.priority,
            image_uri: input.image_uri,
            voice_transcript: input.voice_transcript,
            language,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// One actionable step in a research result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStep {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A factor the user should weigh when acting on a result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionFactor {
    pub id: String,
    pub label: String,
    pub detail: String,
}

/// A cited source with a 0-100 credibility score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub credibility: u8,
    pub snippet: String,
}

/// A completed research payload. Immutable once produced by a resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub summary: String,
    pub steps: Vec<SolutionStep>,
    pub decision_factors: Vec<DecisionFactor>,
    pub sources: Vec<SourceLink>,
    pub estimated_time_minutes: u32,
    pub difficulty: DifficultyLevel,
    pub recommended_actions: Vec<String>,
}

/// Lifecycle status of a history record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Processing,
    Completed,
    Failed,
}

/// A persisted, favoritable record pairing one request with its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Equal to the request id; unique across the history collection.
    pub id: String,
    pub request: SearchRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SearchResult>,
    pub status: RecordStatus,
    pub favorite: bool,
    pub saved_at: String,
}

impl HistoryRecord {
    /// Creates the record appended to history when a search succeeds.
    pub fn completed(request: SearchRequest, result: SearchResult) -> Self {
        Self {
            id: request.id.clone(),
            request,
            result: Some(result),
            status: RecordStatus::Completed,
            favorite: false,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
