//! Random-surfer transition model
//!
//! With probability `damping` the surfer follows one of the current page's
//! links uniformly at random; otherwise it jumps to any page in the corpus.
//! A dangling page is treated as linking to every page, so every page is
//! equally likely next.

use super::common::{check_damping, Corpus, Distribution, Outflow};
use crate::error::{RankError, RankResult};
use ndarray::{Array1, Array2};

/// Next-page distribution for `page`.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> RankResult<Distribution> {
    check_damping(damping)?;
    let idx = corpus
        .index_of(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;
    Ok(Distribution::from_dense(corpus, transition_row(corpus, idx, damping).into_raw_vec()))
}

/// Dense next-page distribution from page index `idx`.
///
/// `idx` must be a valid index of `corpus` and `damping` must already be
/// validated; this is the per-row form the estimators call.
pub fn transition_row(corpus: &Corpus, idx: usize, damping: f64) -> Array1<f64> {
    let n = corpus.len() as f64;

    match corpus.outflow(idx) {
        Outflow::Everywhere => Array1::from_elem(corpus.len(), 1.0 / n),
        Outflow::Links(targets) => {
            let mut row = Array1::from_elem(corpus.len(), (1.0 - damping) / n);
            let follow = damping / targets.len() as f64;
            for &target in targets {
                row[target] += follow;
            }
            row
        }
    }
}

/// Row-stochastic transition matrix: row `i` is `transition_row(corpus, i, damping)`.
pub fn transition_matrix(corpus: &Corpus, damping: f64) -> Array2<f64> {
    let n = corpus.len();
    let mut matrix = Array2::zeros((n, n));
    for (i, mut row) in matrix.rows_mut().into_iter().enumerate() {
        row.assign(&transition_row(corpus, i, damping));
    }
    matrix
}
