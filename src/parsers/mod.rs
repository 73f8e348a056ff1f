pub mod html;
pub mod text;


pub use html::{extract_segments, page_text};

use serde::Serialize;
use std::collections::HashSet;

/// A hyperlink and its visible text. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    pub url: String,
    pub anchor: String,
}

impl LinkRef {
    pub fn new(url: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anchor: anchor.into(),
        }
    }
}

/// One block-level unit of the document with the links found inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Whitespace-normalized text
    pub text: String,
    /// Links in document order, possibly empty
    pub links: Vec<LinkRef>,
}

impl Segment {
    pub fn new(text: String, links: Vec<LinkRef>) -> Self {
        Self { text, links }
    }
}

/// All links across the segments, deduplicated by URL.
/// Order is first occurrence and the first anchor wins.
pub fn iter_links(segments: &[Segment]) -> Vec<LinkRef> {
    let mut seen = HashSet::new();
    segments
        .iter()
        .flat_map(|segment| segment.links.iter())
        .filter(|link| seen.insert(link.url.as_str()))
        .cloned()
        .collect()
}
