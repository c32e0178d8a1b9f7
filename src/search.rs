use crate::error::{ErrorKind, ExplorerError};
use crate::github::RepositoryApi;
use crate::models::RepositorySummary;
use crate::storage::Storage;
use crate::store::RepositoryStore;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const REPOSITORY_REQUIRED: &str = "Repository is required! Ex: [author]/[name]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Fetching,
    Error,
}

/// The single error slot shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<ExplorerError> for SearchError {
    fn from(e: ExplorerError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Added(RepositorySummary),
    Failed(ErrorKind),
}

/// Turns typed input into a remembered repository.
pub struct SearchFlow<A: RepositoryApi, S: Storage> {
    api: Arc<A>,
    store: RepositoryStore<S>,
    input: String,
    error: Option<SearchError>,
    state: SearchState,
}

impl<A: RepositoryApi, S: Storage> SearchFlow<A, S> {
    pub fn new(api: Arc<A>, store: RepositoryStore<S>) -> Self {
        Self {
            api,
            store,
            input: String::new(),
            error: None,
            state: SearchState::Idle,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// Empty string means no error.
    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        self.store.repositories()
    }

    pub fn store(&self) -> &RepositoryStore<S> {
        &self.store
    }

    /// Validates the current input, looks it up and appends the result.
    ///
    /// On failure the input is left untouched so it can be corrected.
    pub async fn submit(&mut self) -> SearchOutcome {
        if self.input.is_empty() {
            return self.fail(ExplorerError::Validation(REPOSITORY_REQUIRED.to_string()));
        }

        self.state = SearchState::Fetching;

        match self.api.get_repository_summary(&self.input).await {
            Ok(repository) => {
                info!(full_name = %repository.full_name, "Repository added");

                if let Err(e) = self.store.append(repository.clone()) {
                    error!(error = %e, "Failed to persist repository list");
                }

                self.error = None;
                self.input.clear();
                self.state = SearchState::Idle;
                SearchOutcome::Added(repository)
            }
            Err(e) => {
                warn!(input = %self.input, error = %e, "Repository search failed");
                self.fail(e)
            }
        }
    }

    fn fail(&mut self, e: ExplorerError) -> SearchOutcome {
        let error = SearchError::from(e);
        let kind = error.kind;
        self.error = Some(error);
        self.state = SearchState::Error;
        SearchOutcome::Failed(kind)
    }
}
