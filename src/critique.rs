use crate::claims::Claim;
use crate::parsers::Segment;
use crate::verify::{LinkResults, Status};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Advisory note about the document's sourcing as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CritiqueItem {
    pub severity: Severity,
    pub note: String,
}

impl CritiqueItem {
    fn new(severity: Severity, note: impl Into<String>) -> Self {
        Self {
            severity,
            note: note.into(),
        }
    }
}

/// Aggregates run statistics into critique notes.
///
/// Every rule is evaluated independently and items are emitted in a fixed
/// order: blocked links, weak links, unsourced numbers, placeholder
/// sources, no links at all.
pub fn generate_critique(
    segments: &[Segment],
    numeric_claims: &[Claim],
    link_results: &LinkResults,
) -> Vec<CritiqueItem> {
    let mut items = Vec::new();

    let blocked_links = link_results.count(Status::Red);
    if blocked_links > 0 {
        items.push(CritiqueItem::new(
            Severity::Medium,
            format!(
                "{} linked sources are blocked or irrelevant; replace with higher-quality sources.",
                blocked_links
            ),
        ));
    }

    let weak_links = link_results.count(Status::Yellow);
    if weak_links > 0 {
        items.push(CritiqueItem::new(
            Severity::Low,
            format!(
                "{} linked sources look only weakly related to the nearby claim; tighten the linkage.",
                weak_links
            ),
        ));
    }

    let unsourced_numbers = numeric_claims.iter().filter(|c| c.links.is_empty()).count();
    if unsourced_numbers > 0 {
        items.push(CritiqueItem::new(
            Severity::High,
            format!(
                "{} numeric claims have no linked source. Add citations or soften the wording.",
                unsourced_numbers
            ),
        ));
    }

    let placeholder_sources = segments
        .iter()
        .filter(|s| s.links.is_empty() && s.text.to_lowercase().contains("source"))
        .count();
    if placeholder_sources > 0 {
        items.push(CritiqueItem::new(
            Severity::Medium,
            format!(
                "{} 'Source' placeholders found without links. Replace with actual URLs.",
                placeholder_sources
            ),
        ));
    }

    if link_results.is_empty() {
        items.push(CritiqueItem::new(
            Severity::High,
            "No hyperlinks were detected. This makes verification difficult.",
        ));
    }

    ::log::debug!("Generated {} critique items", items.len());
    items
}
