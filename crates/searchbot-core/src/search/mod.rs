//! Search domain: request/result models, history, session state, and the
//! resolver and repository seams.

pub mod model;
pub mod repository;
pub mod resolver;
pub mod session;

pub use model::{
    DecisionFactor, DifficultyLevel, HISTORY_CAPACITY, HistoryRecord, PriorityLevel, RecordStatus,
    SearchInput, SearchRequest, SearchResult, SolutionStep, SourceLink,
};
pub use repository::HistoryRepository;
pub use resolver::SearchResolver;
pub use session::{SearchSessionState, SessionStatus};
