//! Error types for crawling, ranking and reporting

use linkrank_algorithms::RankError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur between reading a corpus and printing its ranks
#[derive(Error, Debug)]
pub enum LinkRankError {
    /// The corpus path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Reading the corpus failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Corpus or parameter rejected by an estimator
    #[error("Rank error: {0}")]
    RankError(#[from] RankError),

    /// JSON report serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;
