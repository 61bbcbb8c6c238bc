//! # Profile README
//!
//! Regenerates a terminal-styled GitHub profile README from the account's
//! public activity.
//!
//! ## Overview
//!
//! Five independent fetchers run side by side against the GitHub REST API:
//! - Recent push activity as log lines
//! - Time since the last push
//! - Language byte-count shares as a bar chart
//! - A synthetic `git status` listing of recently updated repositories
//! - The latest commit on the profile repository
//!
//! Each fetcher reports an [`outcome::Outcome`]: live data or the reason it
//! fell back. The renderer swaps every fallback for a fixed placeholder, so
//! the only way a run fails is the final file write.
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// Recent push activity lines
pub mod activity;

/// GitHub REST client and the `Api` seam
pub mod api;

/// Command-line arguments and environment configuration
pub mod cli;

/// Latest commit on the profile repository
pub mod commit_id;

/// Terminal report printed after a run
pub mod display;

/// Language share aggregation and bar chart rows
pub mod languages;

/// Wire models for events, repositories, commits and language tallies
pub mod models;

/// Live-or-fallback result shared by every fetcher
pub mod outcome;

/// Relative time since the last push
pub mod recency;

/// Concurrent fetch pass, template substitution and file output
pub mod render;

/// Synthetic repository status listing
pub mod status;

/// Canned API responses for tests
pub mod testing;

/// Formatting helpers for time, truncation and plurals
pub mod utils;
