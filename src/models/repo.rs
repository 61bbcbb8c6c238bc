use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry from `/users/{user}/repos`
#[derive(Deserialize, Debug, Clone)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}
