//! Canned API for tests.
//!
//! `StubApi` answers each path with a preconfigured JSON body or error and
//! records the paths it was asked for. Unknown paths answer 404.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::{Api, ApiError};

#[derive(Default)]
pub struct StubApi {
    responses: HashMap<String, Result<serde_json::Value, ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: serde_json::Value) -> Self {
        self.responses.insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, path: &str, err: ApiError) -> Self {
        self.responses.insert(path.to_string(), Err(err));
        self
    }

    /// Paths requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Api for StubApi {
    fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }
        self.responses
            .get(path)
            .cloned()
            .unwrap_or(Err(ApiError::Status(404)))
    }
}
