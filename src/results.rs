use crate::claims::Claim;
use crate::critique::CritiqueItem;
use crate::parsers::{LinkRef, Segment, iter_links};
use crate::policy::SourceQuality;
use crate::verify::{ClaimCheck, LinkResults, Status};
use serde::Serialize;
use std::collections::HashMap;

/// Fixed advisory attached to every date claim
pub const DATE_CLAIM_NOTE: &str = "Date claims need a linked source for verification";

/// Result row for one numeric claim
#[derive(Debug, Clone, Serialize)]
pub struct NumberResult {
    pub claim_id: String,
    pub text: String,
    pub numbers: Vec<String>,
    pub status: Status,
    pub notes: String,
    pub links: Vec<String>,
}

/// Result row for one resolved link
#[derive(Debug, Clone, Serialize)]
pub struct LinkResult {
    pub url: String,
    pub anchor: String,
    pub status: Status,
    pub quality: SourceQuality,
    pub notes: String,
}

/// Result row for one date claim
#[derive(Debug, Clone, Serialize)]
pub struct DateResult {
    pub claim_id: String,
    pub text: String,
    pub dates: Vec<String>,
    pub status: Status,
    pub notes: String,
    pub links: Vec<String>,
}

/// Complete output of a verification run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Present when the markup came from the export service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    pub numbers: Vec<NumberResult>,
    pub links: Vec<LinkResult>,
    pub dates: Vec<DateResult>,
    pub critical: Vec<CritiqueItem>,
}

fn link_urls(links: &[LinkRef]) -> Vec<String> {
    links.iter().map(|link| link.url.clone()).collect()
}

impl Report {
    /// Assemble the report from the outputs of every stage
    pub fn build(
        segments: &[Segment],
        numeric_claims: &[Claim],
        numeric_checks: Vec<ClaimCheck>,
        date_claims: &[Claim],
        link_results: &LinkResults,
        critical: Vec<CritiqueItem>,
    ) -> Self {
        let mut checks: HashMap<String, ClaimCheck> = numeric_checks
            .into_iter()
            .map(|check| (check.claim_id.clone(), check))
            .collect();

        let numbers = numeric_claims
            .iter()
            .map(|claim| {
                let (status, notes) = match checks.remove(&claim.claim_id) {
                    Some(check) => (check.status, check.notes),
                    None => (Status::Yellow, String::new()),
                };
                NumberResult {
                    claim_id: claim.claim_id.clone(),
                    text: claim.text.clone(),
                    numbers: claim.numbers().to_vec(),
                    status,
                    notes,
                    links: link_urls(&claim.links),
                }
            })
            .collect();

        let links = iter_links(segments)
            .into_iter()
            .filter_map(|link| {
                let check = link_results.get(&link.url)?;
                Some(LinkResult {
                    url: link.url,
                    anchor: link.anchor,
                    status: check.status,
                    quality: check.quality,
                    notes: check.notes.clone(),
                })
            })
            .collect();

        let dates = date_claims
            .iter()
            .map(|claim| DateResult {
                claim_id: claim.claim_id.clone(),
                text: claim.text.clone(),
                dates: claim.dates().to_vec(),
                status: Status::Yellow,
                notes: DATE_CLAIM_NOTE.to_string(),
                links: link_urls(&claim.links),
            })
            .collect();

        Self {
            doc_id: None,
            numbers,
            links,
            dates,
            critical,
        }
    }

    pub fn with_doc_id(mut self, doc_id: impl Into<String>) -> Self {
        self.doc_id = Some(doc_id.into());
        self
    }
}
