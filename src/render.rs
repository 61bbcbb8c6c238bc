//! # Render Module
//!
//! Runs the five fetchers side by side, then substitutes their results into
//! the profile template and writes it out.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use std::thread::{self, ScopedJoinHandle};
use tracing::{error, info};

use crate::activity::{activity_lines, fetch_activity};
use crate::api::Api;
use crate::commit_id::{commit_label, fetch_commit_id};
use crate::languages::{fetch_language_stats, language_rows};
use crate::models::LanguageShare;
use crate::outcome::{FallbackReason, Outcome};
use crate::recency::{fetch_last_push, last_commit_phrase};
use crate::status::{TagSource, fetch_repo_status, status_section};
use crate::utils::{format_footer_time, format_status_time};

/// Who the page is about.
#[derive(Debug, Clone)]
pub struct Profile {
    pub username: String,
    /// Repository holding the profile README (usually named after the user)
    pub profile_repo: String,
}

impl Profile {
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Profile {
            profile_repo: username.clone(),
            username,
        }
    }
}

/// Raw results of one fetch pass, before any fallback is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    pub activity: Outcome<Vec<String>>,
    pub last_push: Outcome<DateTime<Utc>>,
    pub languages: Outcome<Vec<LanguageShare>>,
    pub status: Outcome<String>,
    pub commit: Outcome<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState {
    Live,
    Empty,
    Failed(String),
}

impl<T> From<&Outcome<T>> for SectionState {
    fn from(outcome: &Outcome<T>) -> Self {
        match outcome.reason() {
            None => SectionState::Live,
            Some(FallbackReason::Empty) => SectionState::Empty,
            Some(FallbackReason::Failed(msg)) => SectionState::Failed(msg.clone()),
        }
    }
}

impl Sections {
    /// Per-section live/fallback state, in template order.
    pub fn summary(&self) -> Vec<(&'static str, SectionState)> {
        vec![
            ("activity", (&self.activity).into()),
            ("last_commit", (&self.last_push).into()),
            ("languages", (&self.languages).into()),
            ("repo_status", (&self.status).into()),
            ("commit_id", (&self.commit).into()),
        ]
    }

    pub fn all_live(&self) -> bool {
        self.summary()
            .iter()
            .all(|(_, state)| *state == SectionState::Live)
    }
}

fn settle<T>(handle: ScopedJoinHandle<'_, Outcome<T>>, section: &str) -> Outcome<T> {
    handle.join().unwrap_or_else(|_| {
        error!(section, "fetcher panicked");
        Outcome::failed(format!("{section} fetcher panicked"))
    })
}

/// Fan out all five fetchers and wait for every one of them to settle.
///
/// Each fetcher owns its own accumulator; the client is the only thing
/// they share and it is read-only.
pub fn gather<A: Api>(
    api: &A,
    profile: &Profile,
    now: DateTime<Utc>,
    tags: &mut (dyn TagSource + Send),
) -> Sections {
    let user = profile.username.as_str();
    let profile_repo = profile.profile_repo.as_str();

    thread::scope(|s| {
        let activity = s.spawn(move || fetch_activity(api, user));
        let last_push = s.spawn(move || fetch_last_push(api, user));
        let languages = s.spawn(move || fetch_language_stats(api, user));
        let status = s.spawn(move || fetch_repo_status(api, user, profile_repo, now, tags));
        let commit = s.spawn(move || fetch_commit_id(api, user, profile_repo));

        Sections {
            activity: settle(activity, "activity"),
            last_push: settle(last_push, "last_commit"),
            languages: settle(languages, "languages"),
            status: settle(status, "repo_status"),
            commit: settle(commit, "commit_id"),
        }
    })
}

fn git_status_block(listing: Option<String>) -> String {
    match listing {
        Some(listing) => format!(
            "\n## LIVE REPOSITORY STATUS\n\n```bash\n$ git status --porcelain --all-repos\n{listing}\n```"
        ),
        None => String::new(),
    }
}

/// Collapse every outcome to its display value and fill in the template.
pub fn render_document(profile: &Profile, sections: Sections, now: DateTime<Utc>) -> String {
    let user = profile.username.as_str();
    let profile_repo = profile.profile_repo.as_str();
    let activity = activity_lines(sections.activity, now).join("\n");
    let last_commit = last_commit_phrase(sections.last_push, now);
    let languages = language_rows(sections.languages);
    let git_status = git_status_block(status_section(sections.status));
    let commit = commit_label(sections.commit);
    let updated = format_status_time(now);
    let footer_time = format_footer_time(now);

    format!(
        r##"# {user}@github ~/profile LIVE

```bash
$ echo 'initializing dynamic profile shell...'
> booting ── [OK]  bootloader: dynamic v2.0
> locale: en_US.UTF-8
> session: interactive (real-time)
> theme: terminal/cmd (enhanced with live data)
> github-api: connected
> fetching user data: complete
> initializing real-time updates: active
```

| WHO AM I | LIVE STATUS |
|----------|-------------|
| `> user:` {user} | `> last_updated:` {updated} |
| `> profile:` https://github.com/{user} | `> timezone:` IST (GMT+5:30) |
| `> repo:` {user}/{profile_repo} | `> last_commit:` {last_commit} |
| `> current_commit:` {commit} | `> status:` online |

{git_status}

## REAL-TIME ACTIVITY MONITOR

```bash
$ tail -f ~/.git_activity.log
{activity}
```

## PERFORMANCE METRICS

```bash
$ analyze-code-metrics --languages --graph
┌─────────────┬──────────────────────────┬─────────┐
│ Language    │ Usage Graph (Real Data)  │ Percent │
├─────────────┼──────────────────────────┼─────────┤
{languages}
└─────────────┴──────────────────────────┴─────────┘
```

## NETWORK CONFIGURATION

```bash
$ cat ~/.bashrc | grep -A 3 "# SOCIAL CONNECTIONS"
# SOCIAL CONNECTIONS
export GITHUB_USER="{user}"
export PROFILE_URL="https://github.com/{user}"
```

```bash
$ exit
> session terminated gracefully
> last_commit: {commit}
> status: ready for next connection
> goodbye!
```

<div align="center">
<sub>Last updated: {footer_time} IST | Commit: {commit} | Auto-generated</sub>
</div>"##
    )
}

/// Overwrite `path` with `contents`. The only step whose failure ends the run.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "profile document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{FixedTag, StatusTag};
    use crate::testing::StubApi;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 34, 5).unwrap()
    }

    #[test]
    fn test_everything_unreachable_still_renders() {
        let api = StubApi::new();
        let profile = Profile::new("octocat");
        let sections = gather(&api, &profile, now(), &mut FixedTag(StatusTag::Added));

        let summary = sections.summary();
        assert_eq!(summary.len(), 5);
        assert!(summary
            .iter()
            .all(|(_, state)| matches!(state, SectionState::Failed(_))));
        assert!(!sections.all_live());

        let doc = render_document(&profile, sections, now());
        assert!(doc.starts_with("# octocat@github ~/profile LIVE"));
        assert!(doc.contains("`> last_updated:` 01/05/2024, 15:04:05"));
        assert!(doc.contains("`> last_commit:` 2 hours ago"));
        assert!(doc.contains("`> current_commit:` latest"));
        assert!(doc.contains("│ API Error   │"));
        assert!(doc.contains("Add dynamic README automation"));
        assert!(!doc.contains("LIVE REPOSITORY STATUS"));
        assert!(doc.contains("Last updated: May 1st 2024, 3:04:05 pm IST"));
    }

    #[test]
    fn test_status_block_only_when_present() {
        assert_eq!(git_status_block(None), "");
        let block = git_status_block(Some("## a...origin/main\n M x\n".to_string()));
        assert!(block.contains("## LIVE REPOSITORY STATUS"));
        assert!(block.contains("$ git status --porcelain --all-repos\n## a...origin/main"));
    }
}
