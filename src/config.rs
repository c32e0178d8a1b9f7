use crate::cli::Cli;
use crate::error::Result;
use crate::github::normalize_base_url;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const FALLBACK_DATA_DIR: &str = ".github-explorer";

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub api_base_url: Url,
    pub data_dir: PathBuf,
    pub timeout: Duration,
}

impl ExplorerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(&cli.api_url)?,
            data_dir: cli.data_dir.clone().unwrap_or_else(default_data_dir),
            timeout: Duration::from_secs(cli.timeout),
        })
    }
}

pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "github-explorer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
