//! Error types for the rank estimators

use thiserror::Error;

/// Errors raised before or while estimating ranks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Corpus contains no pages")]
    EmptyCorpus,

    #[error("Page {0} is not part of the corpus")]
    UnknownPage(String),

    #[error("Damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("Sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("Convergence tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("Ranks did not converge after {sweeps} sweeps (last change {delta})")]
    NotConverged { sweeps: usize, delta: f64 },
}

pub type RankResult<T> = Result<T, RankError>;
