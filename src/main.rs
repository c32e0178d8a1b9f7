use anyhow::Context;
use clap::Parser;
use colored::*;
use github_explorer::app::Session;
use github_explorer::cli::{Cli, Command};
use github_explorer::config::ExplorerConfig;
use github_explorer::detail::{DetailLoader, DetailState};
use github_explorer::github::GitHubClient;
use github_explorer::render::{render_error, render_repository_list, render_repository_page};
use github_explorer::search::{SearchFlow, SearchOutcome};
use github_explorer::storage::FileStorage;
use github_explorer::store::RepositoryStore;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries rendered screens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ExplorerConfig::from_cli(&cli).context("Invalid configuration")?;
    debug!(?config, "Starting GitHub Explorer");

    let api = Arc::new(
        GitHubClient::new(config.api_base_url.as_str(), config.timeout)
            .context("Failed to create GitHub client")?,
    );

    match cli.command.unwrap_or(Command::Browse) {
        Command::Add { full_name } => {
            let store = RepositoryStore::initialize(FileStorage::new(&config.data_dir));
            let mut search = SearchFlow::new(api, store);
            search.set_input(full_name);

            match search.submit().await {
                SearchOutcome::Added(repo) => {
                    println!("✅ Added {}\n", repo.full_name.bold());
                    print!("{}", render_repository_list(search.repositories()));
                }
                SearchOutcome::Failed(_) => {
                    eprint!("{}", render_error(search.error_message()));
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            let store = RepositoryStore::initialize(FileStorage::new(&config.data_dir));
            print!("{}", render_repository_list(store.repositories()));
        }
        Command::Show { full_name } => {
            let loader = DetailLoader::new(api);
            loader
                .navigate(full_name.as_str())
                .await
                .await
                .context("Repository page task failed")?;

            match loader.state().await {
                DetailState::Loaded { page, .. } => print!("{}", render_repository_page(&page)),
                _ => {
                    eprintln!("{}", format!("Could not load {}", full_name).yellow());
                    std::process::exit(1);
                }
            }
        }
        Command::Browse => {
            let store = RepositoryStore::initialize(FileStorage::new(&config.data_dir));
            let search = SearchFlow::new(api.clone(), store);
            let mut session = Session::new(search, DetailLoader::new(api));

            session
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}
