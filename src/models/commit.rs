use serde::Deserialize;

use crate::utils::first_line;

#[derive(Deserialize, Debug, Clone)]
pub struct CommitDetail {
    pub message: String,
}

/// One entry from `/repos/{owner}/{repo}/commits`
#[derive(Deserialize, Debug, Clone)]
pub struct CommitSummary {
    pub sha: String,
    pub commit: CommitDetail,
}

impl CommitSummary {
    pub fn short_sha(&self) -> String {
        self.sha.chars().take(7).collect()
    }

    pub fn subject(&self) -> &str {
        first_line(&self.commit.message)
    }
}
