//! Tagged result of one fetcher.
//!
//! Fetchers never propagate errors. They report either live data or the
//! reason they had to give up, and the renderer turns a fallback into the
//! fixed placeholder for that section.

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The API answered but nothing qualified
    Empty,
    /// The API call failed or returned something unusable
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Fallback(FallbackReason),
}

impl<T> Outcome<T> {
    pub fn empty() -> Self {
        Outcome::Fallback(FallbackReason::Empty)
    }

    pub fn failed(err: impl std::fmt::Display) -> Self {
        Outcome::Fallback(FallbackReason::Failed(err.to_string()))
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn live(&self) -> Option<&T> {
        match self {
            Outcome::Live(v) => Some(v),
            Outcome::Fallback(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Outcome::Live(_) => None,
            Outcome::Fallback(r) => Some(r),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Live(v) => Outcome::Live(f(v)),
            Outcome::Fallback(r) => Outcome::Fallback(r),
        }
    }

    /// Collapse to a plain value, choosing the placeholder by reason.
    pub fn resolve(self, fallback: impl FnOnce(&FallbackReason) -> T) -> T {
        match self {
            Outcome::Live(v) => v,
            Outcome::Fallback(r) => fallback(&r),
        }
    }
}

impl<T> From<ApiError> for Outcome<T> {
    fn from(err: ApiError) -> Self {
        Outcome::failed(err)
    }
}
