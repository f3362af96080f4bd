//! Iterative PageRank solver
//!
//! Relaxes `rank[p] = (1 - d) / n + d * sum(rank[i] / outdeg(i))` over all
//! pages `i` that lead to `p` until the largest per-page change of a sweep
//! drops below the tolerance. Dangling pages spread their rank over the
//! whole corpus, matching the transition model.

use super::common::{check_damping, Corpus, Distribution};
use crate::error::{RankError, RankResult};
use tracing::{debug, trace, warn};

/// Iterative solver configuration
#[derive(Debug, Clone, PartialEq)]
pub struct IterateConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Stop once the largest per-page change of a sweep is below this
    pub tolerance: f64,
    /// Give up after this many sweeps
    pub max_sweeps: usize,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 0.001,
            max_sweeps: 10_000,
        }
    }
}

/// Converged ranks plus how the solver got there
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    pub ranks: Distribution,
    /// Sweeps performed
    pub sweeps: usize,
    /// Largest per-page change in the final sweep
    pub delta: f64,
}

/// Iterate to convergence with the default tolerance and sweep cap.
pub fn iterate(corpus: &Corpus, damping: f64) -> RankResult<Distribution> {
    let config = IterateConfig {
        damping_factor: damping,
        ..IterateConfig::default()
    };
    iterate_with(corpus, &config).map(|c| c.ranks)
}

/// Iterate from the uniform distribution.
pub fn iterate_with(corpus: &Corpus, config: &IterateConfig) -> RankResult<Convergence> {
    let n = corpus.len();
    solve(corpus, config, vec![1.0 / n as f64; n])
}

/// Iterate from `initial` (pages it lacks start at 0).
pub fn iterate_from(
    corpus: &Corpus,
    config: &IterateConfig,
    initial: &Distribution,
) -> RankResult<Convergence> {
    solve(corpus, config, initial.to_dense(corpus))
}

fn solve(corpus: &Corpus, config: &IterateConfig, mut scores: Vec<f64>) -> RankResult<Convergence> {
    check_damping(config.damping_factor)?;
    if !(config.tolerance > 0.0) {
        return Err(RankError::InvalidTolerance(config.tolerance));
    }

    let n = corpus.len();
    let d = config.damping_factor;
    let base_score = (1.0 - d) / n as f64;
    let dangling: Vec<usize> = (0..n).filter(|&i| corpus.is_dangling(i)).collect();
    let mut next_scores = vec![0.0; n];
    let mut delta = f64::INFINITY;

    for sweep in 1..=config.max_sweeps {
        // Dangling pages feed every page equally
        let dangling_share: f64 = dangling
            .iter()
            .map(|&i| scores[i] / corpus.effective_out_degree(i) as f64)
            .sum();

        delta = 0.0;
        for p in 0..n {
            let sum_incoming: f64 = corpus
                .predecessors(p)
                .iter()
                .map(|&i| scores[i] / corpus.effective_out_degree(i) as f64)
                .sum::<f64>()
                + dangling_share;

            next_scores[p] = base_score + d * sum_incoming;
            delta = f64::max(delta, (next_scores[p] - scores[p]).abs());
        }

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);
        trace!("Sweep {}: max change {}", sweep, delta);

        if delta < config.tolerance {
            debug!("Converged after {} sweeps (max change {})", sweep, delta);
            return Ok(Convergence {
                ranks: Distribution::from_dense(corpus, scores),
                sweeps: sweep,
                delta,
            });
        }
    }

    warn!(
        "No convergence within {} sweeps (max change {})",
        config.max_sweeps, delta
    );
    Err(RankError::NotConverged {
        sweeps: config.max_sweeps,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(pages: &[&str]) -> Corpus {
        Corpus::from_links(
            pages
                .iter()
                .enumerate()
                .map(|(i, &p)| (p, vec![pages[(i + 1) % pages.len()]])),
        )
        .unwrap()
    }

    #[test]
    fn test_two_page_cycle() {
        let corpus = ring(&["A", "B"]);
        let ranks = iterate(&corpus, 0.85).unwrap();
        assert!((ranks.get("A").unwrap() - 0.5).abs() < 1e-9);
        assert!((ranks.get("B").unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_three_page_ring() {
        let corpus = ring(&["A", "B", "C"]);
        let ranks = iterate(&corpus, 0.85).unwrap();
        for (_, value) in ranks.iter() {
            assert!((value - 1.0 / 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]).unwrap();
        let ranks = iterate(&corpus, 0.85).unwrap();
        assert!((ranks.get("A").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_mass_is_kept() {
        let corpus = Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec![]),
        ])
        .unwrap();
        let result = iterate_with(&corpus, &IterateConfig::default()).unwrap();

        assert!((result.ranks.total() - 1.0).abs() < 1e-6);
        assert!(result.delta < 0.001);
        assert!(result.sweeps > 1);
        // 2.html collects from three pages and ranks highest
        let top = result.ranks.get("2.html").unwrap();
        for (page, value) in result.ranks.iter() {
            assert!(value <= top, "{} outranks 2.html", page);
        }
    }

    #[test]
    fn test_restart_from_converged_is_stable() {
        let corpus = Corpus::from_links([
            ("A", vec!["B", "C"]),
            ("B", vec!["C"]),
            ("C", vec!["A"]),
            ("D", vec!["C"]),
        ])
        .unwrap();
        let tight = IterateConfig {
            tolerance: 1e-6,
            ..IterateConfig::default()
        };
        let first = iterate_with(&corpus, &tight).unwrap();

        let config = IterateConfig::default();
        let again = iterate_from(&corpus, &config, &first.ranks).unwrap();
        assert_eq!(again.sweeps, 1);
        assert!(first.ranks.max_abs_diff(&again.ranks) < config.tolerance);
    }

    /// Termination uses the largest per-page change of a sweep, never the
    /// smallest: a sweep where one page settles while others still move
    /// must not stop the solver.
    #[test]
    fn test_convergence_uses_largest_change() {
        let corpus = Corpus::from_links([
            ("A", vec!["B"]),
            ("B", vec!["C"]),
            ("C", vec!["A"]),
            ("D", vec!["A"]),
        ])
        .unwrap();
        let config = IterateConfig::default();
        let result = iterate_with(&corpus, &config).unwrap();

        // D has no inbound links and settles after the first sweep, so a
        // smallest-change rule would stop at sweep 2 with the ring unsettled
        assert!(result.sweeps > 2);
        assert!((result.ranks.get("D").unwrap() - 0.0375).abs() < 1e-12);

        let restarted = iterate_from(&corpus, &config, &result.ranks).unwrap();
        assert!(restarted.ranks.max_abs_diff(&result.ranks) < config.tolerance);
        assert!((result.ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_cap_reports_non_convergence() {
        // Undamped, this chain oscillates between two states forever
        let corpus = Corpus::from_links([
            ("A", vec!["B"]),
            ("B", vec!["A"]),
            ("C", vec!["A"]),
        ])
        .unwrap();
        let config = IterateConfig {
            damping_factor: 1.0,
            tolerance: 0.001,
            max_sweeps: 50,
        };

        match iterate_with(&corpus, &config) {
            Err(RankError::NotConverged { sweeps, delta }) => {
                assert_eq!(sweeps, 50);
                assert!(delta > 0.3);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config() {
        let corpus = ring(&["A", "B"]);
        let config = IterateConfig {
            tolerance: 0.0,
            ..IterateConfig::default()
        };
        assert_eq!(
            iterate_with(&corpus, &config),
            Err(RankError::InvalidTolerance(0.0))
        );
        assert_eq!(iterate(&corpus, 2.0), Err(RankError::InvalidDamping(2.0)));
    }
}
