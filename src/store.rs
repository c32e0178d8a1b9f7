use crate::error::Result;
use crate::models::RepositorySummary;
use crate::storage::Storage;
use tracing::{debug, info, warn};

/// Slot holding the JSON array of searched repositories.
pub const STORAGE_KEY: &str = "@githubExplorer:repositories";

/// Ordered list of previously searched repositories.
///
/// Every append rewrites the whole snapshot, so persisting costs O(n) in the
/// list length. Duplicates by `full_name` are kept.
pub struct RepositoryStore<S: Storage> {
    storage: S,
    repositories: Vec<RepositorySummary>,
}

impl<S: Storage> RepositoryStore<S> {
    /// Loads the persisted list. Missing, unreadable or corrupt data yields an empty list.
    pub fn initialize(storage: S) -> Self {
        let repositories = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<RepositorySummary>>(&raw) {
                Ok(repositories) => {
                    info!(count = repositories.len(), "Loaded repository list");
                    repositories
                }
                Err(e) => {
                    warn!(error = %e, "Stored repository list is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored repository list");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored repository list, starting empty");
                Vec::new()
            }
        };

        Self { storage, repositories }
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Appends to the end and persists the full list before returning.
    ///
    /// The entry stays in memory even when the write fails.
    pub fn append(&mut self, repo: RepositorySummary) -> Result<()> {
        self.repositories.push(repo);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.repositories)?;
        self.storage.set(STORAGE_KEY, &raw)?;
        debug!(count = self.repositories.len(), "Persisted repository list");
        Ok(())
    }
}
