use std::path::PathBuf;
use std::time::Duration;

use crate::api::{ClientConfig, DEFAULT_API_BASE};
use crate::render::Profile;

pub const DEFAULT_USERNAME: &str = "tumansutradhar";

#[derive(clap::Parser, Debug)]
#[command(name = "profile-readme", version, about = "Regenerate a live GitHub profile README")]
pub struct Args {
    /// API credential, sent as a bearer token. Not validated locally
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub account the page is about
    #[arg(long, env = "GITHUB_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Repository holding the profile README. Defaults to the username
    #[arg(long, env = "PROFILE_REPO")]
    pub profile_repo: Option<String>,

    /// Destination file, overwritten on every run
    #[arg(long, env = "PROFILE_README_PATH", default_value = "README.md")]
    pub output: PathBuf,

    /// REST API base address
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Print the document to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    /// Debug mode: verbose logging and a per-section report
    #[arg(long, env = "PROFILE_README_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    pub fn profile(&self) -> Profile {
        let username = self.username.trim().to_string();
        let profile_repo = self
            .profile_repo
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| username.clone());
        Profile {
            username,
            profile_repo,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}
