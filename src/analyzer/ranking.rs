//! Aggregation and ranking of changed-path records.

use super::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A distinct path together with the number of commits that changed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCount {
    pub path: String,
    pub count: u32,
}

/// Tallies one count per record, orders the distinct paths by count
/// descending with lexicographic path order breaking ties, and keeps the
/// first `limit` entries.
///
/// Histories with fewer than `limit` distinct paths return everything they
/// have; no padding takes place.
///
/// # Errors
///
/// Returns `AnalyzerError::InvalidLimit` when `limit` is zero.
pub fn rank(records: Vec<String>, limit: usize) -> Result<Vec<PathCount>, AnalyzerError> {
    if limit < 1 {
        return Err(AnalyzerError::InvalidLimit(limit));
    }

    let mut counts: HashMap<String, u32> = HashMap::new();
    for path in records {
        *counts.entry(path).or_insert(0) += 1;
    }

    let mut entries: Vec<PathCount> = counts
        .into_iter()
        .map(|(path, count)| PathCount { path, count })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path)));
    entries.truncate(limit);

    Ok(entries)
}
