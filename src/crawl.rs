//! Corpus crawler
//!
//! Reads a directory of HTML pages and extracts anchor links between them.

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::{Corpus, PageId};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

lazy_static! {
    static ref ANCHOR_HREF: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// All `href` targets of anchor tags in `html`
pub fn extract_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Build a corpus from every `*.html` file directly inside `directory`.
///
/// Links to files outside the crawled set and self links are dropped.
pub fn crawl<P: AsRef<Path>>(directory: P) -> LinkRankResult<Corpus> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(LinkRankError::NotADirectory(directory.to_path_buf()));
    }
    info!("Crawling corpus at {:?}", directory);

    let mut pages: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let filename = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };
        if !filename.ends_with(".html") || !entry.file_type()?.is_file() {
            continue;
        }

        let contents = fs::read_to_string(entry.path())?;
        let links = extract_links(&contents);
        debug!("{}: {} links", filename, links.len());
        pages.insert(filename, links);
    }

    let corpus = Corpus::from_links(pages)?;
    info!(
        "Crawled {} pages with {} internal links",
        corpus.len(),
        corpus.link_count()
    );
    Ok(corpus)
}
