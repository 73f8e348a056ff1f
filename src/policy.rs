use serde::Serialize;
use url::{ParseError, Url};

/// Social and wiki domains that are never accepted as evidence.
/// Subdomains match too.
pub const BLOCKED_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "wikimedia.org",
    "reddit.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "linkedin.com",
    "tiktok.com",
    "quora.com",
];

/// Competitive-exam and test-prep brands, matched as host substrings
pub const COMP_EXAM_HINTS: &[&str] = &[
    "byju",
    "toppr",
    "testbook",
    "gradeup",
    "unacademy",
    "embibe",
    "adda247",
    "careerpower",
    "bankersadda",
    "ssc",
    "upsc",
    "neet",
    "jee",
];

/// Market-research report vendors, matched as host substrings
pub const MARKET_RESEARCH_HINTS: &[&str] = &[
    "fortunebusinessinsights",
    "grandviewresearch",
    "marketresearchfuture",
    "reportlinker",
    "alliedmarketresearch",
    "researchandmarkets",
    "mordorintelligence",
    "imarcgroup",
    "verifiedmarketresearch",
    "marketsandmarkets",
    "databridge",
    "precedenceresearch",
    "futuremarketinsights",
    "gminsights",
    "coherentmarketinsights",
];

/// Blogging platforms that are allowed but downgraded
pub const LOW_TRUST_HINTS: &[&str] = &["blogspot", "wordpress", "medium.com", "substack.com"];

/// Coarse trust tier of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceQuality {
    Blocked,
    Low,
    Standard,
}

/// Content-independent verdict on a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVerdict {
    pub allowed: bool,
    pub reason: Option<String>,
    pub quality: SourceQuality,
}

impl SourceVerdict {
    fn blocked(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            quality: SourceQuality::Blocked,
        }
    }

    fn standard() -> Self {
        Self {
            allowed: true,
            reason: None,
            quality: SourceQuality::Standard,
        }
    }
}

/// Lowercase the hostname and drop a leading `www.`
pub fn base_domain(hostname: &str) -> String {
    let host = hostname.to_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Classify a URL by its domain alone. Rules are applied in a fixed
/// order and the first one that matches decides the verdict.
pub fn classify_source(url: &str) -> SourceVerdict {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(ParseError::RelativeUrlWithoutBase) => {
            return SourceVerdict::blocked("Unsupported URL scheme");
        }
        Err(_) => return SourceVerdict::blocked("Invalid URL"),
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return SourceVerdict::blocked("Unsupported URL scheme");
    }

    let host = base_domain(parsed.host_str().unwrap_or_default());
    if host.is_empty() {
        return SourceVerdict::blocked("Invalid URL");
    }

    if let Some(blocked) = BLOCKED_DOMAINS
        .iter()
        .find(|blocked| host == **blocked || host.ends_with(&format!(".{}", blocked)))
    {
        return SourceVerdict::blocked(format!("Blocked domain: {}", blocked));
    }

    if COMP_EXAM_HINTS.iter().any(|hint| host.contains(hint)) {
        return SourceVerdict::blocked("Competitive exam prep source");
    }

    if MARKET_RESEARCH_HINTS.iter().any(|hint| host.contains(hint)) {
        return SourceVerdict::blocked("Dubious market-research source");
    }

    if LOW_TRUST_HINTS.iter().any(|hint| host.contains(hint)) {
        return SourceVerdict {
            allowed: true,
            reason: Some("Low-trust blog platform".to_string()),
            quality: SourceQuality::Low,
        };
    }

    SourceVerdict::standard()
}
