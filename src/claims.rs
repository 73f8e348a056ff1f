//! Sentence-level extraction of numeric and date claims.

use crate::parsers::text::split_sentences;
use crate::parsers::{LinkRef, Segment};
use regex::Regex;
use std::sync::LazyLock;

/// Currency amounts, plain numbers, percentages and Indian/English
/// magnitude suffixes. The lookarounds keep matches from starting or
/// ending inside a larger alphanumeric token.
static NUMBER_RE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(
        r"(?i)(?<!\w)(?:[₹$€£]?\s*)?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?(?:\s*%|\s*(?:cr|crore|lakh|mn|million|bn|billion))?(?!\w)",
    )
    .expect("number pattern is valid")
});

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\b",
    )
    .expect("month pattern is valid")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("year pattern is valid"));

static FISCAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bFY\s?\d{2}\b|\bQ\d\s?FY\s?\d{2}\b").expect("fiscal pattern is valid")
});

/// What a claim asserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// Number tokens exactly as written in the sentence
    Numeric(Vec<String>),
    /// Month names, then years, then fiscal periods
    Date(Vec<String>),
}

/// One sentence that contains a checkable fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// `num-N` or `date-N`, numbered per fact type
    pub claim_id: String,
    pub text: String,
    pub fact: Fact,
    /// Inherited unchanged from the owning segment
    pub links: Vec<LinkRef>,
}

impl Claim {
    pub fn fact_type(&self) -> &'static str {
        match self.fact {
            Fact::Numeric(_) => "number",
            Fact::Date(_) => "date",
        }
    }

    /// Numbers of a numeric claim; empty for date claims
    pub fn numbers(&self) -> &[String] {
        match &self.fact {
            Fact::Numeric(numbers) => numbers,
            Fact::Date(_) => &[],
        }
    }

    /// Date tokens of a date claim; empty for numeric claims
    pub fn dates(&self) -> &[String] {
        match &self.fact {
            Fact::Date(dates) => dates,
            Fact::Numeric(_) => &[],
        }
    }
}

/// All number tokens in a sentence, verbatim apart from trimming
pub fn find_numbers(sentence: &str) -> Vec<String> {
    NUMBER_RE
        .find_iter(sentence)
        .filter_map(|found| match found {
            Ok(m) => Some(m.as_str().trim().to_string()),
            Err(e) => {
                // Only reachable if the backtracking limit is hit
                ::log::warn!("Number scan aborted on sentence: {}", e);
                None
            }
        })
        .collect()
}

/// All date tokens in a sentence: months, then years, then fiscal periods
pub fn find_dates(sentence: &str) -> Vec<String> {
    [&*MONTH_RE, &*YEAR_RE, &*FISCAL_RE]
        .into_iter()
        .flat_map(|re| re.find_iter(sentence))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Runs one extraction pass over every sentence of every segment,
/// numbering the claims it keeps as `{prefix}-1`, `{prefix}-2`, ...
fn extract_with<F>(segments: &[Segment], prefix: &str, mut detect: F) -> Vec<Claim>
where
    F: FnMut(&str) -> Option<Fact>,
{
    let mut claims = Vec::new();
    for segment in segments {
        for sentence in split_sentences(&segment.text) {
            let Some(fact) = detect(&sentence) else {
                continue;
            };
            claims.push(Claim {
                claim_id: format!("{}-{}", prefix, claims.len() + 1),
                text: sentence,
                fact,
                links: segment.links.clone(),
            });
        }
    }
    claims
}

/// Sentences with at least one currency or number token
pub fn extract_numeric_claims(segments: &[Segment]) -> Vec<Claim> {
    let claims = extract_with(segments, "num", |sentence| {
        let numbers = find_numbers(sentence);
        (!numbers.is_empty()).then_some(Fact::Numeric(numbers))
    });
    ::log::debug!("Extracted {} numeric claims", claims.len());
    claims
}

/// Sentences with a month name, a year in 1900-2099 or a fiscal period
pub fn extract_date_claims(segments: &[Segment]) -> Vec<Claim> {
    let claims = extract_with(segments, "date", |sentence| {
        let dates = find_dates(sentence);
        (!dates.is_empty()).then_some(Fact::Date(dates))
    });
    ::log::debug!("Extracted {} date claims", claims.len());
    claims
}
