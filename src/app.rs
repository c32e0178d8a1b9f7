use crate::detail::{DetailLoader, DetailState};
use crate::error::Result;
use crate::github::RepositoryApi;
use crate::render::{render_error, render_header, render_repository_list, render_repository_page};
use crate::routes::Route;
use crate::search::SearchFlow;
use crate::storage::Storage;
use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;
use tracing::error;

pub const HELP: &str = "Type [author]/[name] to search. :open <n|author/name|path>, :back, :list, :quit";

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Render(String),
    Quit,
}

/// Interactive dashboard / repository screens driven by text lines.
pub struct Session<A: RepositoryApi + 'static, S: Storage> {
    search: SearchFlow<A, S>,
    detail: DetailLoader<A>,
    route: Route,
    pending: Option<JoinHandle<()>>,
}

impl<A: RepositoryApi + 'static, S: Storage> Session<A, S> {
    pub fn new(search: SearchFlow<A, S>, detail: DetailLoader<A>) -> Self {
        Self {
            search,
            detail,
            route: Route::Dashboard,
            pending: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn search(&self) -> &SearchFlow<A, S> {
        &self.search
    }

    pub fn render_dashboard(&self) -> String {
        let mut out = render_header("Explore repositories on GitHub!");
        out.push_str(&render_error(self.search.error_message()));
        out.push_str(&render_repository_list(self.search.repositories()));
        out
    }

    pub async fn handle_line(&mut self, line: &str) -> Step {
        let line = line.trim_end_matches('\r');

        let (command, argument) = match line.strip_prefix(':') {
            Some(rest) => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                (
                    Some(parts.next().unwrap_or_default()),
                    parts.next().unwrap_or_default().trim(),
                )
            }
            None => (None, ""),
        };

        match command {
            Some("quit") | Some("q") => Step::Quit,
            Some("list") => {
                self.route = Route::Dashboard;
                Step::Render(self.render_dashboard())
            }
            Some("back") => Step::Render(self.back().await),
            Some("open") => match self.resolve_target(argument) {
                Some(Route::Repository(full_name)) => Step::Render(self.open(full_name).await),
                Some(Route::Dashboard) => Step::Render(self.back().await),
                None => Step::Render(render_error(&format!("Nothing to open for '{}'", argument))),
            },
            Some("help") => Step::Render(format!("{}\n", HELP)),
            Some(other) => Step::Render(render_error(&format!("Unknown command :{}. {}", other, HELP))),
            None => {
                self.search.set_input(line);
                self.search.submit().await;
                self.route = Route::Dashboard;
                Step::Render(self.render_dashboard())
            }
        }
    }

    /// Accepts a 1-based list index, a route path or a bare `author/name`.
    fn resolve_target(&self, target: &str) -> Option<Route> {
        if target.is_empty() {
            return None;
        }
        if let Ok(index) = target.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| self.search.repositories().get(i))
                .map(|repo| Route::repository(repo.full_name.as_str()));
        }
        if target.starts_with('/') {
            return Route::parse(target);
        }
        Some(Route::repository(target))
    }

    async fn back(&mut self) -> String {
        self.detail.leave().await;
        self.pending = None;
        self.route = Route::Dashboard;
        self.render_dashboard()
    }

    /// Starts loading the page and shows the loading screen right away.
    async fn open(&mut self, full_name: String) -> String {
        self.route = Route::repository(full_name.as_str());
        self.pending = Some(self.detail.navigate(full_name.as_str()).await);

        let mut out = render_header(&self.route.path());
        out.push_str(&format!("{}\n", "Loading...".dimmed()));
        out
    }

    /// The page for the current route, once it has loaded.
    pub async fn render_loaded_page(&self) -> Option<String> {
        let Route::Repository(current) = &self.route else {
            return None;
        };

        match self.detail.state().await {
            DetailState::Loaded { full_name, page } if &full_name == current => {
                let mut out = render_header(&self.route.path());
                out.push_str(&render_repository_page(&page));
                Some(out)
            }
            _ => None,
        }
    }

    /// Reads lines until EOF or `:quit`, writing each rendered screen.
    ///
    /// Loaded pages are written as they arrive, between input lines. At EOF
    /// the page still loading for the current route is awaited once.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(self.render_dashboard().as_bytes()).await?;
        writer.write_all(format!("{}\n", HELP.dimmed()).as_bytes()).await?;
        writer.flush().await?;

        let mut loaded = self.detail.subscribe();
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    match self.handle_line(&line).await {
                        Step::Render(out) => {
                            writer.write_all(out.as_bytes()).await?;
                            writer.flush().await?;
                        }
                        Step::Quit => return Ok(()),
                    }
                }
                Ok(()) = loaded.changed() => {
                    if let Some(out) = self.render_loaded_page().await {
                        writer.write_all(out.as_bytes()).await?;
                        writer.flush().await?;
                        self.pending = None;
                    }
                }
            }
        }

        let on_repository = matches!(self.route, Route::Repository(_));
        if let Some(handle) = self.pending.take().filter(|_| on_repository) {
            if let Err(e) = handle.await {
                error!(error = %e, "Repository page task failed");
            }
            if let Some(out) = self.render_loaded_page().await {
                writer.write_all(out.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }
}
