//! # Status Module
//!
//! A `git status`-flavoured listing of recently updated repositories and
//! their latest commit subjects.
//!
//! The `M`/`A` tag in front of each line is decoration. It is drawn from a
//! [`TagSource`] and says nothing about what the commit actually changed.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::api::Api;
use crate::models::{CommitSummary, RepoSummary};
use crate::outcome::Outcome;
use crate::utils::truncate_with_ellipsis;

pub const MAX_ACTIVE_REPOS: usize = 5;
pub const ACTIVE_WITHIN_DAYS: i64 = 30;
pub const COMMITS_PER_REPO: usize = 3;
pub const SUBJECT_LIMIT: usize = 40;
const TRACKING_BRANCH: &str = "origin/main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Modified,
    Added,
}

impl StatusTag {
    pub fn as_char(self) -> char {
        match self {
            StatusTag::Modified => 'M',
            StatusTag::Added => 'A',
        }
    }
}

pub trait TagSource {
    fn next_tag(&mut self) -> StatusTag;
}

/// Picks `M` or `A` with equal odds from any `rand` generator.
pub struct RandomTags<R: Rng>(pub R);

impl RandomTags<StdRng> {
    pub fn from_entropy() -> Self {
        RandomTags(StdRng::from_entropy())
    }
}

impl<R: Rng> TagSource for RandomTags<R> {
    fn next_tag(&mut self) -> StatusTag {
        if self.0.gen_bool(0.5) {
            StatusTag::Modified
        } else {
            StatusTag::Added
        }
    }
}

/// Always the same tag.
#[derive(Debug, Clone, Copy)]
pub struct FixedTag(pub StatusTag);

impl TagSource for FixedTag {
    fn next_tag(&mut self) -> StatusTag {
        self.0
    }
}

pub fn recent_repos_path(user: &str) -> String {
    format!("/users/{user}/repos?sort=updated&per_page=10")
}

pub fn commits_path(user: &str, repo: &str, per_page: usize) -> String {
    format!("/repos/{user}/{repo}/commits?per_page={per_page}")
}

/// Non-fork repos touched in the last 30 days, minus the profile repo.
pub fn active_repos<'a>(
    repos: &'a [RepoSummary],
    profile_repo: &str,
    now: DateTime<Utc>,
) -> Vec<&'a RepoSummary> {
    repos
        .iter()
        .filter(|r| {
            !r.fork
                && now.signed_duration_since(r.updated_at).num_days() < ACTIVE_WITHIN_DAYS
                && r.name != profile_repo
        })
        .take(MAX_ACTIVE_REPOS)
        .collect()
}

pub fn repo_block(repo: &str, commits: &[CommitSummary], tags: &mut dyn TagSource) -> Vec<String> {
    let mut lines = Vec::with_capacity(commits.len() + 2);
    lines.push(format!("## {repo}...{TRACKING_BRANCH}"));
    for commit in commits {
        lines.push(format!(
            " {} {}",
            tags.next_tag().as_char(),
            truncate_with_ellipsis(commit.subject(), SUBJECT_LIMIT)
        ));
    }
    lines.push(String::new());
    lines
}

pub fn fetch_repo_status<A: Api>(
    api: &A,
    user: &str,
    profile_repo: &str,
    now: DateTime<Utc>,
    tags: &mut dyn TagSource,
) -> Outcome<String> {
    let repos: Vec<RepoSummary> = match api.get_as(&recent_repos_path(user)) {
        Ok(repos) => repos,
        Err(err) => {
            warn!(error = %err, "Error fetching repo status");
            return err.into();
        }
    };

    let active = active_repos(&repos, profile_repo, now);
    debug!(active = active.len(), "active repositories");

    let mut lines: Vec<String> = Vec::new();
    for repo in active {
        let path = commits_path(user, &repo.name, COMMITS_PER_REPO);
        match api.get_as::<Vec<CommitSummary>>(&path) {
            Ok(commits) if !commits.is_empty() => {
                lines.extend(repo_block(&repo.name, &commits, tags));
            }
            Ok(_) => {}
            Err(err) => warn!(repo = %repo.name, error = %err, "Could not fetch commits"),
        }
    }

    if lines.is_empty() {
        return Outcome::empty();
    }
    Outcome::Live(lines.join("\n"))
}

/// `None` drops the whole section from the document.
pub fn status_section(outcome: Outcome<String>) -> Option<String> {
    match outcome {
        Outcome::Live(listing) => Some(listing),
        Outcome::Fallback(_) => None,
    }
}
