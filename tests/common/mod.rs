#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use github_explorer::error::{ExplorerError, Result};
use github_explorer::github::RepositoryApi;
use github_explorer::models::{Issue, RepoOwner, RepositoryDetail, RepositorySummary};
use github_explorer::storage::Storage;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn summary(full_name: &str) -> RepositorySummary {
    let owner = full_name.split('/').next().unwrap_or_default();
    RepositorySummary {
        full_name: full_name.to_string(),
        description: format!("{} description", full_name),
        owner: RepoOwner {
            login: owner.to_string(),
            avatar_url: format!("https://avatars.example/{}", owner),
        },
    }
}

pub fn detail(full_name: &str, stars: u64) -> RepositoryDetail {
    RepositoryDetail {
        summary: summary(full_name),
        stargazers_count: stars,
        forks_count: stars / 10,
        open_issues_count: 2,
    }
}

pub fn issue(id: u64, full_name: &str) -> Issue {
    Issue {
        id,
        title: format!("Issue {} on {}", id, full_name),
        html_url: format!("https://github.com/{}/issues/{}", full_name, id),
        author_login: "octocat".to_string(),
    }
}

/// Scripted in-process API with call counters and per-repository delays.
#[derive(Default)]
pub struct MockApi {
    repos: HashMap<String, RepositoryDetail>,
    issues: HashMap<String, Vec<Issue>>,
    delays: HashMap<String, Duration>,
    failing_issues: HashSet<String>,
    failing_repos: HashSet<String>,
    pub summary_calls: AtomicUsize,
    pub repo_calls: AtomicUsize,
    pub issue_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, full_name: &str, stars: u64) -> Self {
        self.repos.insert(full_name.to_string(), detail(full_name, stars));
        self.issues.insert(
            full_name.to_string(),
            vec![issue(1, full_name), issue(2, full_name)],
        );
        self
    }

    pub fn with_delay(mut self, full_name: &str, delay: Duration) -> Self {
        self.delays.insert(full_name.to_string(), delay);
        self
    }

    pub fn with_failing_issues(mut self, full_name: &str) -> Self {
        self.failing_issues.insert(full_name.to_string());
        self
    }

    pub fn with_failing_repo(mut self, full_name: &str) -> Self {
        self.failing_repos.insert(full_name.to_string());
        self
    }

    pub fn total_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
            + self.repo_calls.load(Ordering::SeqCst)
            + self.issue_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self, full_name: &str) {
        if let Some(delay) = self.delays.get(full_name) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn lookup(&self, full_name: &str) -> Result<RepositoryDetail> {
        self.repos
            .get(full_name)
            .cloned()
            .ok_or_else(|| ExplorerError::NotFound(format!("repos/{}", full_name)))
    }
}

#[async_trait]
impl RepositoryApi for MockApi {
    async fn get_repository_summary(&self, full_name: &str) -> Result<RepositorySummary> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(full_name).await;
        self.lookup(full_name).map(RepositorySummary::from)
    }

    async fn get_repository(&self, full_name: &str) -> Result<RepositoryDetail> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(full_name).await;
        if self.failing_repos.contains(full_name) {
            return Err(ExplorerError::ApiError(
                "API request failed with status 502 Bad Gateway: ".to_string(),
            ));
        }
        self.lookup(full_name)
    }

    async fn list_issues(&self, full_name: &str) -> Result<Vec<Issue>> {
        self.issue_calls.fetch_add(1, Ordering::SeqCst);
        self.wait(full_name).await;
        if self.failing_issues.contains(full_name) {
            return Err(ExplorerError::ApiError(
                "API request failed with status 500 Internal Server Error: ".to_string(),
            ));
        }
        self.lookup(full_name)?;
        Ok(self.issues.get(full_name).cloned().unwrap_or_default())
    }
}

/// Storage that reads nothing and refuses every write.
pub struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ExplorerError::StorageError("storage is read-only".to_string()))
    }
}

fn react_json() -> serde_json::Value {
    json!({
        "id": 10270250,
        "name": "react",
        "full_name": "facebook/react",
        "description": "The library for web and native user interfaces.",
        "owner": {
            "login": "facebook",
            "id": 69631,
            "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4"
        },
        "stargazers_count": 230000,
        "forks_count": 47000,
        "open_issues_count": 900
    })
}

fn react_issues_json() -> serde_json::Value {
    json!([
        {
            "id": 1001,
            "number": 31000,
            "title": "Bug: useEffect runs twice",
            "html_url": "https://github.com/facebook/react/issues/31000",
            "state": "open",
            "user": { "login": "alice" }
        },
        {
            "id": 1002,
            "number": 31001,
            "title": "Docs typo",
            "html_url": "https://github.com/facebook/react/issues/31001",
            "state": "open",
            "user": { "login": "bob" }
        }
    ])
}

async fn repo_handler(Path((owner, name)): Path<(String, String)>) -> Response {
    match (owner.as_str(), name.as_str()) {
        ("facebook", "react") => Json(react_json()).into_response(),
        ("broken", "repo") => (StatusCode::OK, r#"{"full_name": 5}"#).into_response(),
        ("limited", "repo") => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "API rate limit exceeded" })),
        )
            .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
    }
}

async fn issues_handler(Path((owner, name)): Path<(String, String)>) -> Response {
    match (owner.as_str(), name.as_str()) {
        ("facebook", "react") => Json(react_issues_json()).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
    }
}

/// Serves a few fixed GitHub payloads on a random local port.
pub async fn spawn_fixture_server() -> SocketAddr {
    let app = Router::new()
        .route("/repos/:owner/:name", get(repo_handler))
        .route("/repos/:owner/:name/issues", get(issues_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Fixture server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fixture server failed");
    });

    addr
}
