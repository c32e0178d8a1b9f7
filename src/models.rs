use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{GitHubIssue, GitHubOwner, GitHubRepo, GitHubRepoSummary};

/// Repository as remembered in the local list.
///
/// Field names follow the API's snake_case so stored lists stay compatible
/// with the raw lookup payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
}

/// Summary plus engagement stats, fetched fresh on every page visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDetail {
    pub summary: RepositorySummary,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub html_url: String,
    pub author_login: String,
}

/// Everything the repository screen shows, loaded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPage {
    pub detail: RepositoryDetail,
    pub issues: Vec<Issue>,
}

impl From<GitHubOwner> for RepoOwner {
    fn from(owner: GitHubOwner) -> Self {
        Self {
            login: owner.login,
            avatar_url: owner.avatar_url,
        }
    }
}

impl From<GitHubRepoSummary> for RepositorySummary {
    fn from(repo: GitHubRepoSummary) -> Self {
        Self {
            full_name: repo.full_name,
            description: repo.description.unwrap_or_default(),
            owner: repo.owner.into(),
        }
    }
}

impl From<GitHubRepo> for RepositoryDetail {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            summary: RepositorySummary {
                full_name: repo.full_name,
                description: repo.description.unwrap_or_default(),
                owner: repo.owner.into(),
            },
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            open_issues_count: repo.open_issues_count,
        }
    }
}

impl From<RepositoryDetail> for RepositorySummary {
    fn from(detail: RepositoryDetail) -> Self {
        detail.summary
    }
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            id: issue.id,
            title: issue.title,
            html_url: issue.html_url,
            author_login: issue.user.login,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
