//! Rank estimation module
//!
//! The estimators live in the `linkrank-algorithms` crate.
//! This module validates parameters once and runs both estimators.

use crate::config::RankConfig;
use linkrank_algorithms::{iterate_with, sample_with_rng, Corpus, Distribution, RankResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

// Re-export algorithms
pub use linkrank_algorithms::{
    iterate, iterate_from, sample, transition, transition_matrix, Convergence, IterateConfig,
    Outflow, PageId, RankError,
};

/// Both estimates for one corpus, reported separately
#[derive(Debug, Clone, PartialEq)]
pub struct RankReport {
    /// Rounds used by the sampling estimator
    pub samples: usize,
    /// Sweeps the iterative solver needed
    pub sweeps: usize,
    pub sampling: Distribution,
    pub iteration: Distribution,
}

/// Run the sampling estimator and the iterative solver on `corpus`.
///
/// The corpus is read-only, so the two run side by side on the rayon pool.
pub fn rank(corpus: &Corpus, config: &RankConfig) -> RankResult<RankReport> {
    config.validate()?;
    info!(
        "Ranking {} pages (damping {}, {} samples)",
        corpus.len(),
        config.damping_factor,
        config.samples
    );

    let iterate_config = config.iterate_config();
    let (sampling, iteration) = rayon::join(
        || {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            sample_with_rng(corpus, config.damping_factor, config.samples, &mut rng)
        },
        || iterate_with(corpus, &iterate_config),
    );
    let sampling = sampling?;
    let iteration = iteration?;

    info!("Iteration converged after {} sweeps", iteration.sweeps);
    Ok(RankReport {
        samples: config.samples,
        sweeps: iteration.sweeps,
        sampling,
        iteration: iteration.ranks,
    })
}
