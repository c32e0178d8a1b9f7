use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub full_name: String,
    pub description: Option<String>,
    pub owner: GitHubOwner,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
pub struct GitHubIssue {
    pub id: u64,
    pub title: String,
    pub html_url: String,
    pub user: GitHubIssueUser,
}

#[derive(Debug, Deserialize)]
pub struct GitHubIssueUser {
    pub login: String,
}

/// Subset of the repository payload needed to remember a repository.
#[derive(Debug, Deserialize)]
pub struct GitHubRepoSummary {
    pub full_name: String,
    pub description: Option<String>,
    pub owner: GitHubOwner,
}
