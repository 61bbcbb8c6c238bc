//! # Recency Module
//!
//! How long ago the most recent push happened, in words.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::api::Api;
use crate::models::Event;
use crate::outcome::Outcome;
use crate::utils::{pluralize, to_ist};

pub const FALLBACK_PHRASE: &str = "2 hours ago";
const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

pub fn recent_events_path(user: &str) -> String {
    format!("/users/{user}/events/public")
}

/// Bucket an elapsed minute count into `just now` / minutes / hours / days.
pub fn humanize_minutes(minutes: i64) -> String {
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < MINUTES_PER_HOUR {
        format!("{} ago", pluralize(minutes, "minute"))
    } else if minutes < MINUTES_PER_DAY {
        format!("{} ago", pluralize(minutes / MINUTES_PER_HOUR, "hour"))
    } else {
        format!("{} ago", pluralize(minutes / MINUTES_PER_DAY, "day"))
    }
}

/// Timestamp of the first push event in feed order.
pub fn fetch_last_push<A: Api>(api: &A, user: &str) -> Outcome<DateTime<Utc>> {
    let events: Vec<Event> = match api.get_as(&recent_events_path(user)) {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, "Error fetching last commit time");
            return err.into();
        }
    };
    match events.iter().find(|e| e.is_push()) {
        Some(event) => Outcome::Live(event.created_at),
        None => Outcome::empty(),
    }
}

pub fn last_commit_phrase(outcome: Outcome<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match outcome {
        Outcome::Live(pushed_at) => {
            let elapsed = to_ist(now).signed_duration_since(to_ist(pushed_at));
            humanize_minutes(elapsed.num_minutes())
        }
        Outcome::Fallback(_) => FALLBACK_PHRASE.to_string(),
    }
}
