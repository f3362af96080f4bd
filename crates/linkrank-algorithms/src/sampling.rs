//! Sampling estimator
//!
//! Estimates the stationary distribution by advancing a surfer from a
//! uniformly random start page. Rather than tracking one discrete position
//! per sample, the whole position distribution is propagated: each round
//! applies the transition operator once (`mixture = mixture · T`). The
//! result is deterministic once the start page is drawn.

use super::common::{check_damping, Corpus, Distribution};
use super::transition::{transition_matrix, transition_row};
use crate::error::{RankError, RankResult};
use rand::Rng;
use tracing::{debug, trace};

/// Estimate ranks from `num_samples` rounds, starting at a random page.
pub fn sample(corpus: &Corpus, damping: f64, num_samples: usize) -> RankResult<Distribution> {
    sample_with_rng(corpus, damping, num_samples, &mut rand::thread_rng())
}

/// Same as [`sample`] with a caller-supplied random source.
pub fn sample_with_rng<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    num_samples: usize,
    rng: &mut R,
) -> RankResult<Distribution> {
    check_damping(damping)?;
    if num_samples == 0 {
        return Err(RankError::InvalidSampleCount(num_samples));
    }

    let start = rng.gen_range(0..corpus.len());
    debug!(
        "Sampling {} rounds from {} (damping {})",
        num_samples,
        corpus.page(start),
        damping
    );

    // One step from the start page
    let mut mixture = transition_row(corpus, start, damping);
    if num_samples == 1 {
        return Ok(Distribution::from_dense(corpus, mixture.into_raw_vec()));
    }

    let matrix = transition_matrix(corpus, damping);
    for round in 1..num_samples {
        // new[j] = sum_i mixture[i] * T[i][j]
        mixture = mixture.dot(&matrix);
        if round % 1000 == 0 {
            trace!("Sampling round {}: mass {}", round, mixture.sum());
        }
    }

    Ok(Distribution::from_dense(corpus, mixture.into_raw_vec()))
}
