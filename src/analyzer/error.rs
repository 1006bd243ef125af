use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("invalid results limit {0}: must be at least 1")]
    InvalidLimit(usize),

    #[error("failed to read history: {0}")]
    HistoryRead(#[from] git2::Error),
}
