//! Change-frequency analysis pipeline.
//!
//! The analysis runs in three sequential steps:
//!
//! 1. Walk the full commit history and collect one record per changed file
//!    per commit.
//! 2. Tally the records into per-path counts, sort by count descending, and
//!    keep the top N.
//! 3. Render the ranked entries as an aligned table (see [`table`]).
//!
//! Each run is a pure function of the repository's on-disk history; nothing
//! is cached between invocations.

mod error;
mod git;
mod ranking;
pub mod table;

pub use error::AnalyzerError;
use git::GitRepository;
pub use ranking::{rank, PathCount};

/// Runs the change-frequency analysis against one repository.
pub struct ChurnAnalyzer {
    repo: GitRepository,
}

impl ChurnAnalyzer {
    /// Opens the repository at `path` for analysis.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::NotARepository` when `path` is not a git
    /// repository.
    pub fn new(path: impl AsRef<std::path::Path>) -> Result<Self, AnalyzerError> {
        Ok(Self {
            repo: GitRepository::open(path)?,
        })
    }

    /// Produces the `limit` most frequently changed paths, ordered by
    /// change count descending with lexicographic tie-break.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::InvalidLimit` when `limit` is zero and
    /// `AnalyzerError::HistoryRead` when the history walk fails.
    pub fn analyze(&self, limit: usize) -> Result<Vec<PathCount>, AnalyzerError> {
        log::debug!("extracting changed paths from history");
        let records = self.repo.changed_paths()?;
        log::info!("extracted {} path records", records.len());

        let ranked = rank(records, limit)?;
        log::info!("ranked {} distinct paths (limit {})", ranked.len(), limit);

        Ok(ranked)
    }
}
