//! # API Module
//!
//! Thin read-only client for the GitHub REST API. Every fetcher goes through
//! the [`Api`] trait so tests can swap in canned responses.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";
const DEFAULT_USER_AGENT: &str = concat!("profile-readme/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS or timeout failure before a status was received
    #[error("transport error: {0}")]
    Transport(String),

    /// Any non-2xx response
    #[error("GitHub API returned status {0}")]
    Status(u16),

    /// Body was not JSON, or not the shape the caller expected
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ApiError::Status(code),
            ureq::Error::Json(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// A single `GET path -> JSON` exchange against a fixed base address.
pub trait Api: Sync {
    fn get(&self, path: &str) -> Result<serde_json::Value, ApiError>;

    /// `get` followed by decoding into a typed model.
    fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>
    where
        Self: Sized,
    {
        let value = self.get(path)?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_API_BASE.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Blocking client; one instance is shared read-only by every fetcher.
pub struct GitHubClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: Option<String>,
    user_agent: String,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();

        // An empty credential is sent as no credential at all; the API then
        // answers with its anonymous limits or a 401 that fetchers absorb.
        let auth_header = config
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"));

        GitHubClient {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
            user_agent: config.user_agent,
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Api for GitHubClient {
    fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", ACCEPT)
            .header("User-Agent", self.user_agent.as_str());
        if let Some(auth) = self.auth_header.as_deref() {
            request = request.header("Authorization", auth);
        }

        let mut response = request.call()?;
        let value: serde_json::Value = response.body_mut().read_json()?;
        Ok(value)
    }
}
