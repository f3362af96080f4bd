//! LinkRank
//!
//! Ranks the pages of a directory of linked HTML documents with PageRank,
//! estimated two independent ways.
//!
//! # Architecture
//!
//! - `crawl`: directory of `*.html` files → [`Corpus`]
//! - `algo`: runs the sampling estimator and the iterative solver from
//!   `linkrank-algorithms` on the same corpus
//! - `report`: prints both rank sets, sorted by page
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{rank, Corpus, RankConfig};
//!
//! let corpus = Corpus::from_links([
//!     ("a.html", vec!["b.html"]),
//!     ("b.html", vec!["a.html"]),
//! ]).unwrap();
//!
//! let report = rank(&corpus, &RankConfig::default()).unwrap();
//! assert!((report.iteration.get("a.html").unwrap() - 0.5).abs() < 1e-6);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod crawl;
pub mod error;
pub mod report;

// Re-export main types for convenience
pub use algo::{rank, RankReport};
pub use config::RankConfig;
pub use crawl::{crawl, extract_links};
pub use error::{LinkRankError, LinkRankResult};
pub use linkrank_algorithms::{Corpus, Distribution, PageId, RankError};
pub use report::{render, OutputFormat};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
