//! # Languages Module
//!
//! Byte counts per language summed over the user's own repositories and
//! drawn as a fixed-width bar chart table.

use tracing::{debug, warn};

use crate::api::Api;
use crate::models::{LanguageBytes, LanguageShare, LanguageTally, RepoSummary};
use crate::outcome::{FallbackReason, Outcome};

pub const MAX_REPOS: usize = 20;
pub const TOP_LANGUAGES: usize = 5;
pub const BAR_SEGMENTS: usize = 20;
const BAR_WIDTH: usize = 25;
const NAME_WIDTH: usize = 11;
const PERCENT_CAP: f64 = 99.9;

pub const NO_DATA_ROW: &str = "│ No Data     │ ░░░░░░░░░░░░░░░░░░░░     │  0.0%   │";
pub const API_ERROR_ROW: &str = "│ API Error   │ ░░░░░░░░░░░░░░░░░░░░     │  0.0%   │";

pub fn repos_path(user: &str) -> String {
    format!("/users/{user}/repos?per_page=100")
}

pub fn languages_path(user: &str, repo: &str) -> String {
    format!("/repos/{user}/{repo}/languages")
}

/// Filled segments out of [`BAR_SEGMENTS`]: `round(min(pct, 99.9) / 5)`.
pub fn filled_segments(percentage: f64) -> usize {
    let capped = percentage.min(PERCENT_CAP).max(0.0);
    ((capped / 5.0).round() as usize).min(BAR_SEGMENTS)
}

pub fn render_bar(percentage: f64) -> String {
    let filled = filled_segments(percentage);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_SEGMENTS - filled)
    );
    format!("{bar:<BAR_WIDTH$}")
}

fn fit_name(name: &str) -> String {
    let cut: String = name.chars().take(NAME_WIDTH).collect();
    format!("{cut:<NAME_WIDTH$}")
}

/// `│ Rust        │ ████████████████░░░░     │ 80.0%   │`
pub fn render_language_row(share: &LanguageShare) -> String {
    let shown = share.percentage.min(PERCENT_CAP);
    let percent = if shown < 10.0 {
        format!(" {shown:.1}%    │")
    } else {
        format!(" {shown:.1}%   │")
    };
    format!(
        "│ {} │ {}│{}",
        fit_name(&share.name),
        render_bar(share.percentage),
        percent
    )
}

pub fn fetch_language_stats<A: Api>(api: &A, user: &str) -> Outcome<Vec<LanguageShare>> {
    let repos: Vec<RepoSummary> = match api.get_as(&repos_path(user)) {
        Ok(repos) => repos,
        Err(err) => {
            warn!(error = %err, "Error fetching language stats");
            return err.into();
        }
    };

    let mut tally = LanguageTally::new();
    for repo in repos.iter().filter(|r| !r.fork).take(MAX_REPOS) {
        match api.get_as::<LanguageBytes>(&languages_path(user, &repo.name)) {
            Ok(languages) => tally.add(&languages),
            Err(err) => warn!(repo = %repo.name, error = %err, "Could not fetch languages"),
        }
    }
    debug!(total_bytes = tally.total(), "language tally complete");

    if tally.is_empty() {
        return Outcome::empty();
    }
    Outcome::Live(tally.top(TOP_LANGUAGES))
}

/// Table body: one row per language, or the placeholder row.
pub fn language_rows(outcome: Outcome<Vec<LanguageShare>>) -> String {
    match outcome {
        Outcome::Live(shares) => shares
            .iter()
            .map(render_language_row)
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Fallback(FallbackReason::Empty) => NO_DATA_ROW.to_string(),
        Outcome::Fallback(FallbackReason::Failed(_)) => API_ERROR_ROW.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::testing::StubApi;
    use serde_json::json;

    fn repo(name: &str, fork: bool) -> serde_json::Value {
        json!({ "name": name, "fork": fork, "updated_at": "2024-05-01T00:00:00Z" })
    }

    #[test]
    fn test_filled_segments_formula() {
        assert_eq!(filled_segments(0.0), 0);
        assert_eq!(filled_segments(2.4), 0);
        assert_eq!(filled_segments(2.5), 1);
        assert_eq!(filled_segments(47.6), 10);
        assert_eq!(filled_segments(99.9), 20);
        assert_eq!(filled_segments(100.0), 20);
    }

    #[test]
    fn test_row_layout() {
        let row = render_language_row(&LanguageShare {
            name: "Rust".to_string(),
            percentage: 80.0,
        });
        assert_eq!(
            row,
            "│ Rust        │ ████████████████░░░░     │ 80.0%   │"
        );

        let row = render_language_row(&LanguageShare {
            name: "JavaScriptXYZ".to_string(),
            percentage: 4.25,
        });
        assert!(row.starts_with("│ JavaScriptX │ █░░░"));
        assert!(row.ends_with("│ 4.2%    │") || row.ends_with("│ 4.3%    │"));
    }

    #[test]
    fn test_full_share_is_capped() {
        let row = render_language_row(&LanguageShare {
            name: "Go".to_string(),
            percentage: 100.0,
        });
        assert_eq!(row, "│ Go          │ ████████████████████     │ 99.9%   │");
    }

    #[test]
    fn test_aggregates_non_fork_repos_and_skips_failures() {
        let api = StubApi::new()
            .with(
                &repos_path("me"),
                json!([repo("a", false), repo("forked", true), repo("b", false), repo("c", false)]),
            )
            .with(&languages_path("me", "a"), json!({ "Rust": 750, "Shell": 50 }))
            .with(&languages_path("me", "b"), json!({ "Rust": 150, "Python": 50 }))
            .with_error(&languages_path("me", "c"), ApiError::Status(500));

        let Outcome::Live(shares) = fetch_language_stats(&api, "me") else {
            panic!("expected live shares");
        };
        assert_eq!(shares[0].name, "Rust");
        assert!((shares[0].percentage - 90.0).abs() < 1e-9);
        assert_eq!(shares.len(), 3);
        assert!(!api.calls().contains(&languages_path("me", "forked")));
    }

    #[test]
    fn test_caps_repo_count() {
        let repos: Vec<_> = (0..30).map(|i| repo(&format!("r{i}"), false)).collect();
        let api = StubApi::new().with(&repos_path("me"), json!(repos));
        let outcome = fetch_language_stats(&api, "me");

        // every per-repo call 404s, so nothing is counted
        assert_eq!(outcome, Outcome::empty());
        let language_calls = api
            .calls()
            .iter()
            .filter(|p| p.ends_with("/languages"))
            .count();
        assert_eq!(language_calls, MAX_REPOS);
    }

    #[test]
    fn test_rows_sorted_and_bounded() {
        let api = StubApi::new()
            .with(&repos_path("me"), json!([repo("a", false)]))
            .with(
                &languages_path("me", "a"),
                json!({ "A": 10, "B": 300, "C": 20, "D": 250, "E": 5, "F": 415 }),
            );
        let Outcome::Live(shares) = fetch_language_stats(&api, "me") else {
            panic!("expected live shares");
        };
        assert_eq!(shares.len(), TOP_LANGUAGES);
        assert!(shares.windows(2).all(|w| w[0].percentage >= w[1].percentage));
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!(sum <= 100.0 + 1e-9);

        let rows = language_rows(Outcome::Live(shares));
        assert_eq!(rows.lines().count(), TOP_LANGUAGES);
        assert!(rows.lines().next().unwrap().starts_with("│ F "));
    }

    #[test]
    fn test_placeholder_rows() {
        let api = StubApi::new().with(&repos_path("me"), json!([]));
        let outcome = fetch_language_stats(&api, "me");
        assert_eq!(language_rows(outcome), NO_DATA_ROW);

        let api = StubApi::new().with_error(&repos_path("me"), ApiError::Transport("dns".into()));
        assert_eq!(language_rows(fetch_language_stats(&api, "me")), API_ERROR_ROW);
    }
}
