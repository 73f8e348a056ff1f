use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Words ignored when building a segment's keyword set
pub const STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "to", "of", "in", "for", "on", "with", "by", "is", "are", "was",
    "were", "as", "at", "from", "that", "this", "it", "be", "or", "their", "they", "has", "have",
    "had", "not", "but", "which", "who", "will", "would", "can", "could", "should", "into",
];

static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("word pattern is valid"));

/// Collapse every whitespace run to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into sentences.
///
/// A boundary is any whitespace run directly after `.`, `!` or `?`.
/// There is no abbreviation handling, so "Rs. 5" splits after "Rs.".
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        // The terminal mark is one ASCII byte and stays with its sentence
        push_sentence(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Lowercase alphabetic words of three or more letters, minus stopwords,
/// deduplicated in first-seen order
pub fn keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOPWORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

/// Number of keywords that occur anywhere in `text`, ignoring case
pub fn keyword_hits(text: &str, keywords: &[String]) -> usize {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| lowered.contains(keyword.as_str()))
        .count()
}
