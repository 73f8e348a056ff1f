//! Evidence verification for links and numeric claims.
//!
//! Both stages run against one [`VerificationSession`], which owns the
//! per-run caches. Every distinct URL is fetched at most once per run, and
//! a failed fetch is remembered as a failure rather than retried.

pub mod claims;
pub mod fetcher;
pub mod links;

pub use claims::{ClaimCheck, check_numeric_claims};
pub use fetcher::{FetchError, PageFetcher, build_client};
pub use links::{LinkCheck, check_links};

use crate::parsers::page_text;
use serde::Serialize;
use std::collections::HashMap;

/// Traffic-light outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Red,
    Yellow,
    Green,
}

/// Link checks keyed by URL, kept in the order URLs were first resolved
#[derive(Debug, Clone, Default)]
pub struct LinkResults {
    checks: Vec<LinkCheck>,
    index: HashMap<String, usize>,
}

impl LinkResults {
    pub fn get(&self, url: &str) -> Option<&LinkCheck> {
        self.index.get(url).map(|&i| &self.checks[i])
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Record a check; the first check for a URL is kept
    pub fn insert(&mut self, check: LinkCheck) {
        if self.index.contains_key(&check.url) {
            return;
        }
        self.index.insert(check.url.clone(), self.checks.len());
        self.checks.push(check);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkCheck> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Number of checks with the given status
    pub fn count(&self, status: Status) -> usize {
        self.iter().filter(|c| c.status == status).count()
    }
}

/// State private to a single verification run
#[derive(Debug)]
pub struct VerificationSession {
    fetcher: PageFetcher,
    pages: HashMap<String, Result<String, FetchError>>,
    links: LinkResults,
}

impl VerificationSession {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self {
            fetcher,
            pages: HashMap::new(),
            links: LinkResults::default(),
        }
    }

    /// Visible text of a linked page, fetching it on first use
    pub async fn page_text(&mut self, url: &str) -> Result<&str, FetchError> {
        if !self.pages.contains_key(url) {
            let result = self.fetcher.fetch(url).await.map(|html| page_text(&html));
            if let Err(e) = &result {
                ::log::warn!("Could not fetch {}: {}", url, e);
            }
            self.pages.insert(url.to_string(), result);
        }

        match &self.pages[url] {
            Ok(text) => Ok(text.as_str()),
            Err(e) => Err(e.clone()),
        }
    }

    /// Number of distinct URLs requested so far
    pub fn fetched_urls(&self) -> usize {
        self.pages.len()
    }

    pub fn link_results(&self) -> &LinkResults {
        &self.links
    }

    pub fn into_link_results(self) -> LinkResults {
        self.links
    }
}
