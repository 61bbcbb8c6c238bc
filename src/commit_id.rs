//! Latest commit on the profile repository, as `abc1234 - subject`.

use tracing::warn;

use crate::api::Api;
use crate::models::CommitSummary;
use crate::outcome::Outcome;
use crate::status::commits_path;

pub const FALLBACK_LABEL: &str = "latest";

pub fn fetch_commit_id<A: Api>(api: &A, user: &str, profile_repo: &str) -> Outcome<String> {
    let commits: Vec<CommitSummary> = match api.get_as(&commits_path(user, profile_repo, 1)) {
        Ok(commits) => commits,
        Err(err) => {
            warn!(error = %err, "Error fetching commit hash");
            return err.into();
        }
    };
    match commits.first() {
        Some(c) => Outcome::Live(format!("{} - {}", c.short_sha(), c.subject())),
        None => Outcome::empty(),
    }
}

pub fn commit_label(outcome: Outcome<String>) -> String {
    outcome.resolve(|_| FALLBACK_LABEL.to_string())
}
