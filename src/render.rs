use crate::models::{RepositoryPage, RepositorySummary};
use crate::routes::Route;
use colored::*;
use std::fmt::Write;

pub fn render_header(title: &str) -> String {
    format!("{}\n{}\n", title.bold().green(), "=".repeat(50).dimmed())
}

/// Error region; nothing at all when the slot is empty.
pub fn render_error(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!("{} {}\n", "✗".red(), message.red())
    }
}

/// The dashboard list, numbered from 1, each entry with its route.
pub fn render_repository_list(repositories: &[RepositorySummary]) -> String {
    if repositories.is_empty() {
        return format!("{}\n", "No repositories yet. Search for one with [author]/[name].".dimmed());
    }

    let mut out = String::new();
    for (index, repo) in repositories.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, repo.full_name.bold());
        if !repo.description.is_empty() {
            let _ = writeln!(out, "     {}", repo.description);
        }
        let _ = writeln!(
            out,
            "     {} {}",
            format!("@{}", repo.owner.login).cyan(),
            Route::repository(repo.full_name.as_str()).path().dimmed()
        );
    }
    out
}

pub fn render_repository_page(page: &RepositoryPage) -> String {
    let detail = &page.detail;
    let summary = &detail.summary;
    let mut out = String::new();

    let _ = writeln!(out, "{}", summary.full_name.bold());
    if !summary.description.is_empty() {
        let _ = writeln!(out, "{}", summary.description);
    }
    let _ = writeln!(out, "{} {}", "owner:".dimmed(), summary.owner.login.cyan());
    let _ = writeln!(
        out,
        "⭐ {} Stars   {} Forks   {} Open Issues",
        detail.stargazers_count.to_string().bold(),
        detail.forks_count.to_string().bold(),
        detail.open_issues_count.to_string().bold()
    );
    let _ = writeln!(out, "{}", "-".repeat(50).dimmed());

    if page.issues.is_empty() {
        let _ = writeln!(out, "{}", "No open issues.".dimmed());
    }
    for issue in &page.issues {
        let _ = writeln!(out, "• {}", issue.title.bold());
        let _ = writeln!(out, "  {} {}", issue.author_login.cyan(), issue.html_url.dimmed());
    }
    out
}
