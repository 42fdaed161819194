//! End-to-end coverage of the search lifecycle, persistence rules, and
//! storage recovery.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::sync::mpsc;

use searchbot_application::{PersistenceCoordinator, ProfileController, SearchController, bootstrap};
use searchbot_core::config::SearchbotConfig;
use searchbot_core::error::{Result, SearchbotError};
use searchbot_core::search::{
    DifficultyLevel, HistoryRecord, HistoryRepository, PriorityLevel, RecordStatus, SearchInput,
    SearchRequest, SearchResolver, SearchResult, SessionStatus,
};
use searchbot_core::user::{ProfileRepository, ProfileUpdate, UserProfile};
use searchbot_infrastructure::{HISTORY_KEY, USER_KEY};
use tempfile::TempDir;

fn search_input(description: &str) -> SearchInput {
    SearchInput {
        description: description.to_string(),
        category: "DIY & Home Repair".to_string(),
        priority: PriorityLevel::Normal,
        image_uri: None,
        voice_transcript: None,
        language: None,
    }
}

fn canned_result(estimated_time_minutes: u32) -> SearchResult {
    SearchResult {
        summary: "A canned result".to_string(),
        steps: vec![],
        decision_factors: vec![],
        sources: vec![],
        estimated_time_minutes,
        difficulty: DifficultyLevel::Easy,
        recommended_actions: vec![],
    }
}

/// Polls an async condition until it holds.
async fn settle<F, Fut>(condition: F, what: &str)
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..500 {
        if condition().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {}", what);
}

/// Resolves instantly with a fixed result.
struct StubResolver {
    estimated_time_minutes: u32,
}

#[async_trait]
impl SearchResolver for StubResolver {
    async fn resolve(&self, _request: &SearchRequest) -> Result<SearchResult> {
        Ok(canned_result(self.estimated_time_minutes))
    }
}

/// Always fails, standing in for a resolver that cannot fall back.
struct FailingResolver;

#[async_trait]
impl SearchResolver for FailingResolver {
    async fn resolve(&self, _request: &SearchRequest) -> Result<SearchResult> {
        Err(SearchbotError::backend(None, "backend unreachable"))
    }
}

/// Blocks resolution until a permit is released, keeping the session in
/// `processing`.
struct GatedResolver {
    gate: Arc<Semaphore>,
}

#[async_trait]
impl SearchResolver for GatedResolver {
    async fn resolve(&self, _request: &SearchRequest) -> Result<SearchResult> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| SearchbotError::internal("gate closed"))?;
        Ok(canned_result(5))
    }
}

/// In-memory store recording every save with its storage key.
#[derive(Default)]
struct RecordingStore {
    saves: StdMutex<Vec<&'static str>>,
}

impl RecordingStore {
    fn saves(&self) -> Vec<&'static str> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for RecordingStore {
    async fn load(&self) -> Result<Vec<HistoryRecord>> {
        Ok(vec![])
    }

    async fn save(&self, _history: &[HistoryRecord]) -> Result<()> {
        self.saves.lock().unwrap().push(HISTORY_KEY);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for RecordingStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(None)
    }

    async fn save(&self, _profile: &UserProfile) -> Result<()> {
        self.saves.lock().unwrap().push(USER_KEY);
        Ok(())
    }
}

struct Harness {
    search: Arc<SearchController>,
    profile: Arc<ProfileController>,
    store: Arc<RecordingStore>,
}

/// Wires controllers and a spawned coordinator around a recording store.
fn create_harness(resolver: Arc<dyn SearchResolver>) -> Harness {
    let store = Arc::new(RecordingStore::default());
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let search = Arc::new(SearchController::new(
        resolver,
        store.clone(),
        events_tx.clone(),
    ));
    let profile = Arc::new(ProfileController::new(store.clone(), events_tx));
    PersistenceCoordinator::new(search.clone(), profile.clone(), store.clone(), store.clone())
        .spawn(events_rx);

    Harness {
        search,
        profile,
        store,
    }
}

#[tokio::test]
async fn test_submit_creates_exactly_one_completed_record() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 25,
    }));

    harness
        .search
        .submit(search_input("Shower head leaking from connection"))
        .await
        .unwrap();

    let session = harness.search.session().await;
    assert_eq!(session.status, SessionStatus::Success);
    let request_id = session.current_request.unwrap().id;

    let history = harness.search.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, request_id);
    assert_eq!(history[0].status, RecordStatus::Completed);
    assert!(!history[0].favorite);
    assert!(history[0].result.is_some());
}

#[tokio::test]
async fn test_resolver_error_surfaces_and_leaves_history_untouched() {
    let harness = create_harness(Arc::new(FailingResolver));

    let err = harness
        .search
        .submit(search_input("Diagnose a rattling noise at 60mph"))
        .await
        .unwrap_err();
    assert!(err.is_backend());

    let session = harness.search.session().await;
    assert_eq!(session.status, SessionStatus::Error);
    assert!(session.error_message.is_some());
    assert!(harness.search.history().await.is_empty());

    // explicit retry re-enters the machine from idle
    harness.search.clear_current_result().await;
    assert_eq!(harness.search.session().await.status, SessionStatus::Idle);
}

#[tokio::test]
async fn test_second_submit_while_processing_is_rejected() {
    let gate = Arc::new(Semaphore::new(0));
    let harness = create_harness(Arc::new(GatedResolver { gate: gate.clone() }));

    let search = harness.search.clone();
    let first = tokio::spawn(async move {
        search
            .submit(search_input("Plan a week of meal prep dinners"))
            .await
    });

    let search = harness.search.clone();
    settle(
        || {
            let search = search.clone();
            async move { search.session().await.is_processing() }
        },
        "first submit to reach processing",
    )
    .await;

    let err = harness
        .search
        .submit(search_input("A second concurrent question"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchbotError::SearchInProgress));

    gate.add_permits(1);
    first.await.unwrap().unwrap();
    assert_eq!(harness.search.history().await.len(), 1);
}

#[tokio::test]
async fn test_history_is_capped_at_fifty_records() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 1,
    }));

    let mut first_id = None;
    for i in 0..51 {
        harness
            .search
            .submit(search_input(&format!("Research question number {i:02}")))
            .await
            .unwrap();
        if first_id.is_none() {
            first_id = Some(harness.search.history().await[0].id.clone());
        }
    }

    let history = harness.search.history().await;
    assert_eq!(history.len(), 50);
    // the oldest record was evicted
    let first_id = first_id.unwrap();
    assert!(!history.iter().any(|r| r.id == first_id));
    // most-recent-first ordering
    assert_eq!(
        history[0].request.description,
        "Research question number 50"
    );
}

#[tokio::test]
async fn test_double_favorite_toggle_is_idempotent() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 1,
    }));

    harness
        .search
        .submit(search_input("Find a reliable used hatchback"))
        .await
        .unwrap();
    harness
        .search
        .submit(search_input("Compare standing desk options"))
        .await
        .unwrap();

    let history = harness.search.history().await;
    let target = history[1].id.clone();
    let other = history[0].id.clone();

    harness.search.toggle_favorite(&target).await;
    let after_one = harness.search.history().await;
    assert!(after_one.iter().find(|r| r.id == target).unwrap().favorite);
    assert!(!after_one.iter().find(|r| r.id == other).unwrap().favorite);

    harness.search.toggle_favorite(&target).await;
    let after_two = harness.search.history().await;
    assert!(!after_two.iter().find(|r| r.id == target).unwrap().favorite);
    assert!(!after_two.iter().find(|r| r.id == other).unwrap().favorite);

    // unknown ids leave the collection unchanged
    harness.search.toggle_favorite("no-such-record").await;
    assert_eq!(harness.search.history().await.len(), 2);
}

#[tokio::test]
async fn test_mark_failed_clears_result_and_records_message() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 1,
    }));

    harness
        .search
        .submit(search_input("Summarize recent sleep research"))
        .await
        .unwrap();
    let id = harness.search.history().await[0].id.clone();

    harness
        .search
        .mark_failed(&id, "Unable to complete research")
        .await;

    let record = harness.search.history().await.into_iter().next().unwrap();
    assert_eq!(record.status, RecordStatus::Failed);
    assert!(record.result.is_none());
    assert_eq!(
        harness.search.session().await.error_message.as_deref(),
        Some("Unable to complete research")
    );
}

#[tokio::test]
async fn test_completed_searches_increment_metrics() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 25,
    }));

    harness
        .search
        .submit(search_input("Fix a wobbling ceiling fan"))
        .await
        .unwrap();
    harness
        .search
        .submit(search_input("Fix a dripping kitchen faucet"))
        .await
        .unwrap();

    let profile = harness.profile.clone();
    settle(
        || {
            let profile = profile.clone();
            async move { profile.profile().await.metrics.searches_completed == 2 }
        },
        "metrics to reach two completed searches",
    )
    .await;

    let metrics = harness.profile.profile().await.metrics;
    assert_eq!(metrics.searches_completed, 2);
    assert_eq!(metrics.minutes_saved, 50);
}

#[tokio::test]
async fn test_favorite_toggles_and_profile_update_persist_independently() {
    let harness = create_harness(Arc::new(StubResolver {
        estimated_time_minutes: 10,
    }));

    harness
        .search
        .submit(search_input("Choose a beginner road bike"))
        .await
        .unwrap();
    let id = harness.search.history().await[0].id.clone();

    // two rapid toggles followed by a profile rename
    harness.search.toggle_favorite(&id).await;
    harness.search.toggle_favorite(&id).await;
    harness
        .profile
        .update_profile(ProfileUpdate {
            name: Some("Jordan".to_string()),
            ..Default::default()
        })
        .await;

    // submit persists history once and (via metrics) the profile once; the
    // toggles add two history saves and the rename one profile save
    let store = harness.store.clone();
    settle(
        || {
            let store = store.clone();
            async move { store.saves().len() >= 5 }
        },
        "all persistence rules to fire",
    )
    .await;

    let saves = harness.store.saves();
    assert_eq!(saves.iter().filter(|k| **k == HISTORY_KEY).count(), 3);
    assert_eq!(saves.iter().filter(|k| **k == USER_KEY).count(), 2);
}

#[tokio::test]
async fn test_hydration_recovers_from_corrupt_storage() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("searchbot_history.json"),
        "{definitely not json",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("searchbot_user.json"), "42").unwrap();

    let runtime = bootstrap(SearchbotConfig::default(), Some(temp_dir.path()))
        .await
        .unwrap();

    assert!(runtime.search.history().await.is_empty());
    let profile = runtime.profile.profile().await;
    assert_eq!(profile.name, "Busy Alex");
    assert!(!profile.onboarding_complete);
    assert!(runtime.coordinator_running());
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_default_template_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let runtime = bootstrap(SearchbotConfig::default(), Some(temp_dir.path()))
        .await
        .unwrap();

    let started = tokio::time::Instant::now();
    let result = runtime
        .search
        .submit(SearchInput {
            description: "Shower head leaking from connection".to_string(),
            category: "DIY & Home Repair".to_string(),
            priority: PriorityLevel::Normal,
            image_uri: None,
            voice_transcript: None,
            language: None,
        })
        .await
        .unwrap();

    // simulated research latency for a normal-priority request
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(3500), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(3700), "elapsed {elapsed:?}");

    assert!(result.summary.contains("teflon tape"));
    assert_eq!(runtime.search.session().await.status, SessionStatus::Success);

    let history = runtime.search.history().await;
    assert_eq!(history.len(), 1);
    assert!(!history[0].favorite);
    assert_eq!(history[0].request.category, "DIY & Home Repair");
    assert_eq!(history[0].request.language.as_deref(), Some("en"));

    // durable copies settle behind the in-memory commit
    let store = runtime.store.clone();
    settle(
        || {
            let store = store.clone();
            async move { store.load_history().await.len() == 1 }
        },
        "history to reach durable storage",
    )
    .await;

    let store = runtime.store.clone();
    settle(
        || {
            let store = store.clone();
            async move {
                store.load_profile().await.is_some_and(|p| {
                    p.metrics.searches_completed == 1 && p.metrics.minutes_saved == 25
                })
            }
        },
        "metrics to reach durable storage",
    )
    .await;
}
