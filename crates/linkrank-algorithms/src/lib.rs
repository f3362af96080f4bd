//! PageRank estimation over hyperlink corpora
//!
//! Two independent estimators share one transition model:
//! - [`sample`]: propagates a random surfer's position distribution from a
//!   random start page for a fixed number of rounds.
//! - [`iterate`]: relaxes the PageRank recurrence until it stops moving.

pub mod common;
pub mod error;
pub mod transition;
pub mod sampling;
pub mod iterative;

pub use common::{Corpus, Distribution, Outflow, PageId};
pub use error::{RankError, RankResult};
pub use transition::{transition, transition_matrix, transition_row};
pub use sampling::{sample, sample_with_rng};
pub use iterative::{iterate, iterate_from, iterate_with, Convergence, IterateConfig};
