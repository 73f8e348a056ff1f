//! Retrieval of the document under review from the export service.

use crate::error::VerifyError;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;

static DOC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("doc id pattern is valid"));

/// Raw markup of a retrieved document
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub doc_id: String,
    pub html: String,
}

/// Pull the document id out of a reference like `.../document/d/<id>/edit`
pub fn extract_doc_id(reference: &str) -> Result<String, VerifyError> {
    DOC_ID_RE
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| VerifyError::InvalidDocumentUrl(reference.to_string()))
}

/// HTML export endpoint for a document id
pub fn export_url(base_url: &str, doc_id: &str) -> String {
    format!(
        "{}/document/d/{}/export?format=html",
        base_url.trim_end_matches('/'),
        doc_id
    )
}

/// Fetch the exported markup of a document.
///
/// The id is validated before any request is made.
pub async fn fetch_document(
    client: &Client,
    base_url: &str,
    reference: &str,
) -> Result<FetchedDocument, VerifyError> {
    let doc_id = extract_doc_id(reference)?;
    let url = export_url(base_url, &doc_id);
    ::log::info!("Fetching document {} from {}", doc_id, url);

    let html = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    ::log::debug!("Document {} is {} bytes", doc_id, html.len());
    Ok(FetchedDocument { doc_id, html })
}
