use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-explorer")]
#[command(about = "GitHub Explorer - Search repositories, remember them and browse their issues")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Directory holding the remembered repository list
    #[arg(long, env = "GITHUB_EXPLORER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "GITHUB_EXPLORER_LOG", default_value = "warn")]
    pub log_level: String,

    /// HTTP timeout in seconds
    #[arg(
        long,
        env = "GITHUB_EXPLORER_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a repository and add it to the list
    Add {
        /// Repository as [author]/[name]
        #[arg(default_value = "")]
        full_name: String,
    },
    /// Print the remembered repositories
    List,
    /// Show a repository's stats and issues
    Show {
        /// Repository as [author]/[name]
        full_name: String,
    },
    /// Interactive session (default)
    Browse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["github-explorer"]).unwrap();
        assert_eq!(cli.timeout, 30);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["github-explorer", "--timeout", "0"]).is_err());

        let cli = Cli::try_parse_from(["github-explorer", "--timeout", "1"]).unwrap();
        assert_eq!(cli.timeout, 1);
    }

    #[test]
    fn test_show_subcommand() {
        let cli = Cli::try_parse_from(["github-explorer", "show", "rust-lang/rust"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Show {
                full_name: "rust-lang/rust".to_string()
            })
        );
    }

    #[test]
    fn test_add_without_name_is_empty_input() {
        let cli = Cli::try_parse_from(["github-explorer", "add"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                full_name: String::new()
            })
        );
    }
}
