//! Shared data model for the rank estimators
//!
//! Provides a read-only, dense view of a hyperlink corpus and the
//! `Distribution` value type both estimators produce.

use crate::error::{RankError, RankResult};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Page identifier (a file name in a crawled corpus)
pub type PageId = String;

/// Where a page sends its surfer when following a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outflow<'a> {
    /// Dangling page: treated as linking to every page, itself included
    Everywhere,
    /// Dense indices of the pages it links to
    Links(&'a [usize]),
}

/// A dense, integer-indexed view of a corpus using Compressed Sparse Row (CSR) format.
///
/// Pages are indexed in ascending `PageId` order. Self links and links to
/// pages outside the corpus are dropped at construction, so every target
/// index is valid and no page links to itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    /// Mapping from dense index (0..N) back to PageId
    index_to_page: Vec<PageId>,
    /// Mapping from PageId to dense index
    page_to_index: HashMap<PageId, usize>,

    /// Offsets into `out_targets`. Size = page_count + 1
    out_offsets: Vec<usize>,
    /// Contiguous array of target page indices
    out_targets: Vec<usize>,

    /// Offsets into `in_sources`. Size = page_count + 1
    in_offsets: Vec<usize>,
    /// Contiguous array of source page indices
    in_sources: Vec<usize>,
}

impl Corpus {
    /// Build a corpus from `(page, links)` pairs.
    ///
    /// A page listed twice has its link sets merged.
    pub fn from_links<I, P, L, T>(pages: I) -> RankResult<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        let mut raw: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, links) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        if raw.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let index_to_page: Vec<PageId> = raw.keys().cloned().collect();
        let page_to_index: HashMap<PageId, usize> = index_to_page
            .iter()
            .enumerate()
            .map(|(idx, page)| (page.clone(), idx))
            .collect();
        let n = index_to_page.len();

        let mut outgoing: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (u_idx, links) in raw.values().enumerate() {
            // BTreeSet iteration keeps targets sorted and unique
            let targets: Vec<usize> = links
                .iter()
                .filter_map(|target| page_to_index.get(target).copied())
                .filter(|&v_idx| v_idx != u_idx)
                .collect();
            for &v_idx in &targets {
                incoming[v_idx].push(u_idx);
            }
            outgoing.push(targets);
        }

        let mut out_offsets = Vec::with_capacity(n + 1);
        let mut out_targets = Vec::new();
        out_offsets.push(0);
        for targets in outgoing {
            out_targets.extend(targets);
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(n + 1);
        let mut in_sources = Vec::new();
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        Ok(Corpus {
            index_to_page,
            page_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        })
    }

    /// Number of pages (always at least one)
    pub fn len(&self) -> usize {
        self.index_to_page.len()
    }

    /// Always false; an empty corpus cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.index_to_page.is_empty()
    }

    /// Total number of retained links
    pub fn link_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Pages in index order (ascending PageId)
    pub fn pages(&self) -> &[PageId] {
        &self.index_to_page
    }

    /// PageId for a dense index
    pub fn page(&self, idx: usize) -> &str {
        &self.index_to_page[idx]
    }

    /// Dense index for a PageId
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.page_to_index.get(page).copied()
    }

    /// Get the out-degree of a page (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a page
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get incoming neighbors (predecessors) of a page
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    pub fn is_dangling(&self, idx: usize) -> bool {
        self.out_degree(idx) == 0
    }

    /// Where the surfer goes when following a link from `idx`.
    pub fn outflow(&self, idx: usize) -> Outflow<'_> {
        if self.is_dangling(idx) {
            Outflow::Everywhere
        } else {
            Outflow::Links(self.successors(idx))
        }
    }

    /// Number of pages a link-follow from `idx` is spread across:
    /// the whole corpus for a dangling page, its out-degree otherwise.
    pub fn effective_out_degree(&self, idx: usize) -> usize {
        match self.outflow(idx) {
            Outflow::Everywhere => self.len(),
            Outflow::Links(targets) => targets.len(),
        }
    }

    /// PageIds linked from `page`, or `None` if the page is unknown
    pub fn links_of(&self, page: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.index_of(page)?;
        Some(self.successors(idx).iter().map(move |&t| self.page(t)))
    }
}

/// Probability mass per page, ordered by PageId.
///
/// Values are non-negative and sum to 1 within numerical tolerance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Distribution {
    ranks: BTreeMap<PageId, f64>,
}

impl Distribution {
    /// Pair dense values with the corpus pages they belong to
    pub fn from_dense<V>(corpus: &Corpus, values: V) -> Self
    where
        V: IntoIterator<Item = f64>,
    {
        let ranks = corpus
            .pages()
            .iter()
            .cloned()
            .zip(values)
            .collect();
        Distribution { ranks }
    }

    /// Dense values in corpus index order; pages missing here read as 0.
    pub fn to_dense(&self, corpus: &Corpus) -> Vec<f64> {
        corpus.pages().iter().map(|p| self.get(p).unwrap_or(0.0)).collect()
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(p, &v)| (p.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Largest absolute per-page difference. Pages present on only one
    /// side compare against 0.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        let left = self
            .ranks
            .iter()
            .map(|(p, &v)| (v - other.get(p).unwrap_or(0.0)).abs());
        let right = other
            .ranks
            .iter()
            .filter(|(p, _)| !self.ranks.contains_key(*p))
            .map(|(_, &v)| v.abs());
        left.chain(right).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a PageId, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, PageId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.iter()
    }
}

/// Reject damping factors outside [0, 1] (and NaN).
pub(crate) fn check_damping(damping: f64) -> RankResult<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}
