use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const PUSH_EVENT: &str = "PushEvent";

#[derive(Deserialize, Debug, Clone)]
pub struct EventRepo {
    /// `owner/name`
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PushedCommit {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<PushedCommit>,
}

/// One entry from `/users/{user}/events/public`
#[derive(Deserialize, Debug, Clone)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: EventPayload,
}

impl Event {
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }

    /// Message of the last commit in the push, if the payload carries one.
    pub fn latest_message(&self) -> Option<&str> {
        self.payload
            .commits
            .last()
            .and_then(|c| c.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}
