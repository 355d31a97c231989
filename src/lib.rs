//! # Scout Report
//!
//! Derives "how to beat this team" calls from per-player match records.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (observations, datasets, tendencies, insights)
//! - **registry**: Champion → play-style tag lookup
//! - **calculate**: Shared rate arithmetic and ordered rule tables
//! - **analysis**: Role, team, composition and how-to-win analyses
//! - **storage**: CSV/JSONL match record loading
//! - **report**: Report assembly and text rendering
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod analysis;
pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod registry;
pub mod report;
pub mod storage;

pub use analysis::{compositions, how_to_win, role_tendencies, team_tendencies};
pub use models::*;
pub use registry::{ChampionTags, TagRegistry};
pub use report::ScoutingReport;

use std::path::PathBuf;

/// Expand input arguments: glob patterns are matched against the
/// filesystem (sorted), plain paths pass through unchanged.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, glob::PatternError> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !pattern.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
        matched.sort();
        if matched.is_empty() {
            tracing::warn!("No files match {}", pattern);
        }
        paths.extend(matched);
    }
    Ok(paths)
}
