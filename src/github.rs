use crate::error::{ExplorerError, Result};
use crate::models::{Issue, RepositoryDetail, RepositorySummary};
use crate::types::{GitHubIssue, GitHubRepo, GitHubRepoSummary};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read-only repository lookups used by the search flow and the detail loader.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// `GET repos/{full_name}`, keeping only what the local list remembers.
    async fn get_repository_summary(&self, full_name: &str) -> Result<RepositorySummary>;

    /// `GET repos/{full_name}` with engagement stats.
    async fn get_repository(&self, full_name: &str) -> Result<RepositoryDetail>;

    /// `GET repos/{full_name}/issues`, in the order the API returns them.
    async fn list_issues(&self, full_name: &str) -> Result<Vec<Issue>>;
}

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(GitHubClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ExplorerError::ApiError(format!("Invalid request path {}: {}", path, e)))
    }

    async fn make_request(&self, url: &Url) -> Result<Response> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::NOT_FOUND => Err(ExplorerError::NotFound(url.to_string())),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ExplorerError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self.make_request(&url).await?;
        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| ExplorerError::MalformedResponse(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn get_repository_summary(&self, full_name: &str) -> Result<RepositorySummary> {
        let repo: GitHubRepoSummary = self.fetch(&format!("repos/{}", full_name)).await?;
        Ok(repo.into())
    }

    async fn get_repository(&self, full_name: &str) -> Result<RepositoryDetail> {
        let repo: GitHubRepo = self.fetch(&format!("repos/{}", full_name)).await?;
        Ok(repo.into())
    }

    async fn list_issues(&self, full_name: &str) -> Result<Vec<Issue>> {
        let issues: Vec<GitHubIssue> = self.fetch(&format!("repos/{}/issues", full_name)).await?;
        Ok(issues.into_iter().map(Issue::from).collect())
    }
}

/// Parses the configured base URL and makes sure relative paths join under it.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| ExplorerError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(ExplorerError::InvalidBaseUrl(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
