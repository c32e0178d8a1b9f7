use crate::error::Result;
use crate::github::RepositoryApi;
use crate::models::RepositoryPage;
use futures::future::try_join;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the repository screen currently has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Idle,
    Loading { full_name: String },
    Loaded { full_name: String, page: RepositoryPage },
}

impl DetailState {
    pub fn page(&self) -> Option<&RepositoryPage> {
        match self {
            DetailState::Loaded { page, .. } => Some(page),
            _ => None,
        }
    }
}

/// Fetches the repository and its issues concurrently. Fails if either fails.
pub async fn load_page<A: RepositoryApi + ?Sized>(api: &A, full_name: &str) -> Result<RepositoryPage> {
    let (detail, issues) = try_join(api.get_repository(full_name), api.list_issues(full_name)).await?;
    Ok(RepositoryPage { detail, issues })
}

/// Loads repository pages, tagging each load with the navigation that started it.
///
/// A result whose generation is no longer current is dropped, so a slow
/// response for a previous repository never replaces the one on screen.
/// Failed loads leave the state at `Loading`.
pub struct DetailLoader<A: RepositoryApi> {
    api: Arc<A>,
    generation: Arc<AtomicU64>,
    state: Arc<RwLock<DetailState>>,
    loaded: Arc<watch::Sender<u64>>,
}

impl<A: RepositoryApi> Clone for DetailLoader<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            generation: self.generation.clone(),
            state: self.state.clone(),
            loaded: self.loaded.clone(),
        }
    }
}

impl<A: RepositoryApi + 'static> DetailLoader<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(RwLock::new(DetailState::Idle)),
            loaded: Arc::new(watch::channel(0).0),
        }
    }

    /// Ticks each time a current page is applied. Stale results never tick.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.loaded.subscribe()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Starts loading `full_name`, superseding any load still in flight.
    pub async fn navigate(&self, full_name: impl Into<String>) -> JoinHandle<()> {
        let full_name = full_name.into();

        let generation = {
            let mut state = self.state.write().await;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = DetailState::Loading {
                full_name: full_name.clone(),
            };
            generation
        };

        debug!(%full_name, generation, "Loading repository page");

        let api = self.api.clone();
        let current = self.generation.clone();
        let state = self.state.clone();
        let loaded = self.loaded.clone();

        tokio::spawn(async move {
            let result = load_page(&*api, &full_name).await;

            let mut state = state.write().await;
            if current.load(Ordering::SeqCst) != generation {
                debug!(%full_name, generation, "Discarding stale repository page");
                return;
            }

            match result {
                Ok(page) => {
                    info!(%full_name, issues = page.issues.len(), "Repository page loaded");
                    *state = DetailState::Loaded { full_name, page };
                    loaded.send_modify(|count| *count += 1);
                }
                Err(e) => {
                    warn!(%full_name, error = %e, "Failed to load repository page");
                }
            }
        })
    }

    /// Returns to the list screen; any load in flight becomes stale.
    pub async fn leave(&self) {
        let mut state = self.state.write().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = DetailState::Idle;
    }
}
