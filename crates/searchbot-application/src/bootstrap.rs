//! Wires the store, resolver, controllers, and coordinator into a runtime.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use searchbot_core::config::SearchbotConfig;
use searchbot_infrastructure::{FallbackSearchResolver, JsonDocumentStore};

use crate::coordinator::PersistenceCoordinator;
use crate::profile_controller::ProfileController;
use crate::search_controller::SearchController;

/// Handle to a wired SearchBot core: the two controllers plus the store.
///
/// The persistence coordinator runs on its own task for the lifetime of the
/// controllers; presentation shells call into `search` and `profile` and
/// render their snapshots.
pub struct SearchbotRuntime {
    pub search: Arc<SearchController>,
    pub profile: Arc<ProfileController>,
    pub store: Arc<JsonDocumentStore>,
    coordinator: JoinHandle<()>,
}

impl SearchbotRuntime {
    /// Whether the coordinator task is still draining events.
    pub fn coordinator_running(&self) -> bool {
        !self.coordinator.is_finished()
    }
}

/// Builds the runtime: opens the store, constructs the fallback resolver
/// from `config`, starts the persistence coordinator, and hydrates both
/// slices from durable storage.
pub async fn bootstrap(
    config: SearchbotConfig,
    base_dir: Option<&Path>,
) -> Result<SearchbotRuntime> {
    let store = Arc::new(
        JsonDocumentStore::new(base_dir)
            .await
            .context("failed to open document store")?,
    );
    let resolver = Arc::new(
        FallbackSearchResolver::new(config).context("failed to build search resolver")?,
    );

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let search = Arc::new(SearchController::new(
        resolver,
        store.clone(),
        events_tx.clone(),
    ));
    let profile = Arc::new(ProfileController::new(store.clone(), events_tx));

    let coordinator =
        PersistenceCoordinator::new(search.clone(), profile.clone(), store.clone(), store.clone())
            .spawn(events_rx);

    search
        .hydrate_history()
        .await
        .context("failed to hydrate search history")?;
    profile
        .hydrate()
        .await
        .context("failed to hydrate user profile")?;

    tracing::info!("searchbot runtime ready");

    Ok(SearchbotRuntime {
        search,
        profile,
        store,
        coordinator,
    })
}
