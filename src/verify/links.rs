use crate::parsers::Segment;
use crate::parsers::text::{keyword_hits, keywords};
use crate::policy::{SourceQuality, classify_source};
use crate::verify::{Status, VerificationSession};
use serde::Serialize;

/// Keyword hits needed before a link counts as relevant
const RELEVANT_HITS: usize = 3;

/// Verification outcome for one distinct URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheck {
    pub url: String,
    pub status: Status,
    pub quality: SourceQuality,
    pub notes: String,
}

/// Status and note for a page with `hits` of the segment's keywords
fn relevance(hits: usize) -> (Status, &'static str) {
    if hits >= RELEVANT_HITS {
        (Status::Green, "Link content appears relevant to nearby claim")
    } else if hits >= 1 {
        (Status::Yellow, "Link is weakly related to nearby claim")
    } else {
        (Status::Red, "Link content appears unrelated to nearby claim")
    }
}

/// Resolves every distinct link in the document, in first-occurrence order.
///
/// Relevance is judged against the keywords of the segment where the URL
/// first appears. Results accumulate in the session.
pub async fn check_links(session: &mut VerificationSession, segments: &[Segment]) {
    for segment in segments {
        let segment_keywords = keywords(&segment.text);

        for link in &segment.links {
            if session.links.contains(&link.url) {
                continue;
            }

            let source = classify_source(&link.url);
            let check = if !source.allowed {
                LinkCheck {
                    url: link.url.clone(),
                    status: Status::Red,
                    quality: source.quality,
                    notes: source.reason.unwrap_or_else(|| "Blocked source".to_string()),
                }
            } else {
                let (status, notes) = match session.page_text(&link.url).await {
                    Ok(text) => {
                        let (status, notes) = relevance(keyword_hits(text, &segment_keywords));
                        (status, notes.to_string())
                    }
                    Err(e) => (Status::Yellow, format!("Could not fetch link ({})", e)),
                };
                LinkCheck {
                    url: link.url.clone(),
                    status,
                    quality: source.quality,
                    notes,
                }
            };

            ::log::info!("Link {} -> {:?} ({})", check.url, check.status, check.notes);
            session.links.insert(check);
        }
    }
}
