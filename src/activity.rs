//! # Activity Module
//!
//! Recent push activity rendered as `tail -f` style log lines.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::api::Api;
use crate::models::Event;
use crate::outcome::{FallbackReason, Outcome};
use crate::utils::{format_activity_time, repo_short_name, truncate_with_ellipsis};

pub const MAX_ACTIVITY_LINES: usize = 5;
pub const MESSAGE_LIMIT: usize = 50;
const EVENTS_PAGE_SIZE: u32 = 100;
const DEFAULT_MESSAGE: &str = "Updated files";

pub fn events_path(user: &str) -> String {
    format!("/users/{user}/events/public?per_page={EVENTS_PAGE_SIZE}")
}

pub fn format_activity_line(ts: DateTime<Utc>, message: &str, repo: &str) -> String {
    format!(
        "[{}] COMMIT: \"{}\" → {}",
        format_activity_time(ts),
        message,
        repo
    )
}

/// Newest push events first, at most [`MAX_ACTIVITY_LINES`], one line each.
pub fn push_lines(mut events: Vec<Event>) -> Vec<String> {
    events.retain(Event::is_push);
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    events
        .iter()
        .take(MAX_ACTIVITY_LINES)
        .map(|event| {
            let message = event.latest_message().unwrap_or(DEFAULT_MESSAGE);
            format_activity_line(
                event.created_at,
                &truncate_with_ellipsis(message, MESSAGE_LIMIT),
                repo_short_name(&event.repo.name),
            )
        })
        .collect()
}

pub fn fetch_activity<A: Api>(api: &A, user: &str) -> Outcome<Vec<String>> {
    let events: Vec<Event> = match api.get_as(&events_path(user)) {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, "Error fetching commits");
            return err.into();
        }
    };
    debug!(count = events.len(), "Total events found");

    let lines = push_lines(events);
    if lines.is_empty() {
        info!("No recent commits found, using fallback data");
        return Outcome::empty();
    }
    Outcome::Live(lines)
}

/// Live lines, or the single placeholder line for the reason we fell back.
pub fn activity_lines(outcome: Outcome<Vec<String>>, now: DateTime<Utc>) -> Vec<String> {
    outcome.resolve(|reason| match reason {
        FallbackReason::Empty => vec![format_activity_line(
            now,
            "No recent activity detected",
            "profile",
        )],
        FallbackReason::Failed(_) => vec![format_activity_line(
            now - Duration::hours(2),
            "Add dynamic README automation",
            "analyze-code",
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::testing::StubApi;
    use chrono::TimeZone;
    use serde_json::json;

    fn push(ts: &str, repo: &str, messages: &[&str]) -> serde_json::Value {
        let commits: Vec<_> = messages.iter().map(|m| json!({ "message": m })).collect();
        json!({
            "type": "PushEvent",
            "created_at": ts,
            "repo": { "name": repo },
            "payload": { "commits": commits }
        })
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_lines_sorted_newest_first_and_capped() {
        let mut events = Vec::new();
        for day in 1..=8 {
            events.push(push(
                &format!("2024-04-0{day}T00:00:00Z"),
                "me/repo",
                &[format!("day {day}").as_str()],
            ));
        }
        events.push(json!({
            "type": "WatchEvent",
            "created_at": "2024-04-30T00:00:00Z",
            "repo": { "name": "me/starred" },
            "payload": {}
        }));
        let api = StubApi::new().with(&events_path("me"), json!(events));

        let Outcome::Live(lines) = fetch_activity(&api, "me") else {
            panic!("expected live lines");
        };
        assert_eq!(lines.len(), MAX_ACTIVITY_LINES);
        assert!(lines[0].contains("\"day 8\""));
        assert!(lines[4].contains("\"day 4\""));
        assert!(lines.iter().all(|l| !l.contains("starred")));
    }

    #[test]
    fn test_line_format_uses_last_commit_and_short_repo() {
        let events = vec![push(
            "2024-05-01T09:34:05Z",
            "octocat/hello-world",
            &["first", "second"],
        )];
        let api = StubApi::new().with(&events_path("octocat"), json!(events));
        let lines = activity_lines(fetch_activity(&api, "octocat"), now());
        assert_eq!(
            lines,
            vec!["[2024-05-01 03:04:05 PM] COMMIT: \"second\" → hello-world".to_string()]
        );
    }

    #[test]
    fn test_missing_commits_use_default_message() {
        let events = vec![json!({
            "type": "PushEvent",
            "created_at": "2024-05-01T00:00:00Z",
            "repo": { "name": "me/repo" },
            "payload": {}
        })];
        let lines = push_lines(serde_json::from_value(json!(events)).unwrap());
        assert!(lines[0].contains("\"Updated files\""));
    }

    #[test]
    fn test_long_message_truncated() {
        let long = "x".repeat(80);
        let lines = push_lines(
            serde_json::from_value(json!([push("2024-05-01T00:00:00Z", "me/r", &[long.as_str()])]))
                .unwrap(),
        );
        let expected = format!("\"{}...\"", "x".repeat(MESSAGE_LIMIT));
        assert!(lines[0].contains(&expected));
    }

    #[test]
    fn test_no_push_events_gives_single_empty_line() {
        let api = StubApi::new().with(&events_path("me"), json!([]));
        let outcome = fetch_activity(&api, "me");
        assert_eq!(outcome, Outcome::empty());

        let lines = activity_lines(outcome, now());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No recent activity detected"));
        assert!(lines[0].starts_with("[2024-05-01 05:30:00 PM]"));
    }

    #[test]
    fn test_failure_gives_distinct_single_line() {
        let api = StubApi::new().with_error(&events_path("me"), ApiError::Status(401));
        let outcome = fetch_activity(&api, "me");
        assert!(matches!(
            outcome.reason(),
            Some(FallbackReason::Failed(_))
        ));

        let lines = activity_lines(outcome, now());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Add dynamic README automation"));
        assert!(lines[0].starts_with("[2024-05-01 03:30:00 PM]"));
    }
}
