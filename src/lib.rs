// Re-export modules
pub mod claims;
pub mod config;
pub mod critique;
pub mod document;
pub mod error;
pub mod parsers;
pub mod policy;
pub mod results;
pub mod verify;

// Re-export commonly used types for convenience
pub use config::VerifierConfig;
pub use error::VerifyError;
pub use results::Report;

use std::path::PathBuf;
use verify::{PageFetcher, VerificationSession};

/// Where the markup under review comes from
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Reference to a document on the export service
    Doc(String),
    /// Local HTML file
    File(PathBuf),
    /// Markup already in memory
    Markup(String),
}

/// Main builder for a verification run
pub struct Verifier {
    source: DocumentSource,
    config: VerifierConfig,
}

impl Verifier {
    /// Create a new Verifier for the given source with default settings
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            config: VerifierConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, VerifyError> {
        let config = VerifierConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, VerifyError> {
        let config = VerifierConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the per-fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.fetch_timeout_secs = timeout_seconds;
        self
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Load the document and run the whole pipeline over it
    pub async fn run(self) -> Result<Report, VerifyError> {
        let client = verify::build_client(&self.config).map_err(VerifyError::HttpClient)?;

        match self.source {
            DocumentSource::Doc(reference) => {
                let doc =
                    document::fetch_document(&client, &self.config.docs_base_url, &reference)
                        .await?;
                let report = verify_html(PageFetcher::new(client), &doc.html).await;
                Ok(report.with_doc_id(doc.doc_id))
            }
            DocumentSource::File(path) => {
                ::log::info!("Reading markup from {}", path.display());
                let html = tokio::fs::read_to_string(&path).await?;
                Ok(verify_html(PageFetcher::new(client), &html).await)
            }
            DocumentSource::Markup(html) => Ok(verify_html(PageFetcher::new(client), &html).await),
        }
    }
}

/// Runs the claim and evidence pipeline over raw markup.
///
/// Link verification finishes before claim verification starts, and both
/// share one session so no URL is fetched twice.
pub async fn verify_html(fetcher: PageFetcher, html: &str) -> Report {
    let segments = parsers::extract_segments(html);
    let numeric_claims = claims::extract_numeric_claims(&segments);
    let date_claims = claims::extract_date_claims(&segments);
    ::log::info!(
        "Found {} segments, {} numeric claims, {} date claims",
        segments.len(),
        numeric_claims.len(),
        date_claims.len()
    );

    let mut session = VerificationSession::new(fetcher);
    verify::check_links(&mut session, &segments).await;
    let numeric_checks = verify::check_numeric_claims(&mut session, &numeric_claims).await;
    ::log::info!("Fetched {} distinct URLs", session.fetched_urls());
    let link_results = session.into_link_results();

    let critical = critique::generate_critique(&segments, &numeric_claims, &link_results);

    Report::build(
        &segments,
        &numeric_claims,
        numeric_checks,
        &date_claims,
        &link_results,
        critical,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::Severity;
    use crate::policy::SourceQuality;
    use crate::verify::Status;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn markup_verifier(html: String) -> Verifier {
        Verifier::new(DocumentSource::Markup(html)).with_timeout(5)
    }

    #[tokio::test]
    async fn test_pipeline_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/annual-report"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><h1>Annual report</h1>\
                 <p>Company revenue grew to ₹1234 crore in the fiscal year FY24.</p></body></html>",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let report_url = format!("{}/annual-report", server.uri());
        let html = format!(
            r#"<html><body>
            <p>Revenue grew to ₹1,234 crore in FY24. <a href="{report_url}">Annual report</a></p>
            <p>Company revenue details <a href="{report_url}">again</a>
               and <a href="https://en.wikipedia.org/wiki/X">wiki</a>.</p>
            <p>Headcount was 5,000 in March.</p>
            </body></html>"#
        );

        let report = markup_verifier(html).run().await.unwrap();
        assert!(report.doc_id.is_none());

        assert_eq!(report.numbers.len(), 2);
        assert_eq!(report.numbers[0].claim_id, "num-1");
        assert_eq!(report.numbers[0].numbers, vec!["₹1,234 crore"]);
        assert_eq!(report.numbers[0].status, Status::Green);
        assert_eq!(report.numbers[0].links, vec![report_url.clone()]);
        assert_eq!(report.numbers[1].status, Status::Yellow);
        assert!(report.numbers[1].links.is_empty());

        let urls: Vec<&str> = report.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec![report_url.as_str(), "https://en.wikipedia.org/wiki/X"]);
        assert_eq!(report.links[0].anchor, "Annual report");
        assert_eq!(report.links[0].status, Status::Green);
        assert_eq!(report.links[1].status, Status::Red);
        assert_eq!(report.links[1].quality, SourceQuality::Blocked);

        let date_ids: Vec<&str> = report.dates.iter().map(|d| d.claim_id.as_str()).collect();
        assert_eq!(date_ids, vec!["date-1", "date-2"]);
        assert_eq!(report.dates[0].dates, vec!["FY24"]);
        assert_eq!(report.dates[1].dates, vec!["March"]);
        assert!(report.dates.iter().all(|d| d.status == Status::Yellow));

        let severities: Vec<Severity> = report.critical.iter().map(|c| c.severity).collect();
        assert_eq!(severities, vec![Severity::Medium, Severity::High]);
    }

    #[tokio::test]
    async fn test_document_without_links() {
        let html = "<p>Profit was 45% higher.</p><p>Source: internal</p>".to_string();

        let report = markup_verifier(html).run().await.unwrap();
        assert!(report.links.is_empty());
        assert_eq!(report.numbers[0].notes, "No linked source near this numeric claim");

        let notes: Vec<&str> = report.critical.iter().map(|c| c.note.as_str()).collect();
        assert_eq!(
            notes,
            vec![
                "1 numeric claims have no linked source. Add citations or soften the wording.",
                "1 'Source' placeholders found without links. Replace with actual URLs.",
                "No hyperlinks were detected. This makes verification difficult.",
            ]
        );
    }

    #[tokio::test]
    async fn test_doc_source_uses_export_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/document/d/abc123/export"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Nothing to see</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = VerifierConfig {
            docs_base_url: server.uri(),
            ..VerifierConfig::default()
        };
        let report = Verifier::new(DocumentSource::Doc(
            "https://docs.google.com/document/d/abc123/edit".to_string(),
        ))
        .with_config(config)
        .run()
        .await
        .unwrap();

        assert_eq!(report.doc_id.as_deref(), Some("abc123"));
        assert!(report.numbers.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_doc_reference_is_rejected() {
        let err = Verifier::new(DocumentSource::Doc("https://example.com/".to_string()))
            .run()
            .await
            .unwrap_err();
        assert!(matches!(err, VerifyError::InvalidDocumentUrl(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = Verifier::new(DocumentSource::File("/nonexistent/doc.html".into()))
            .run()
            .await
            .unwrap_err();
        assert!(matches!(err, VerifyError::Io(_)));
    }

    #[test]
    fn test_config_from_json_string() {
        let verifier = markup_verifier(String::new())
            .with_config_str(r#"{"fetch_timeout_secs": 3}"#)
            .unwrap();
        assert_eq!(verifier.config().fetch_timeout_secs, 3);
        assert_eq!(verifier.config().max_redirects, 10);

        let err = markup_verifier(String::new())
            .with_config_str("[1, 2")
            .err()
            .unwrap();
        assert!(matches!(err, VerifyError::Config(_)));
    }

    #[test]
    fn test_config_file_missing() {
        let err = markup_verifier(String::new())
            .with_config_file("/nonexistent/claim-check.json")
            .err()
            .unwrap();
        assert!(matches!(err, VerifyError::Io(_)));
    }

    #[test]
    fn test_report_serializes_lowercase_statuses() {
        let report = Report::build(&[], &[], vec![], &[], &Default::default(), vec![]);
        let json = serde_json::to_value(report.with_doc_id("d1")).unwrap();
        assert_eq!(json["doc_id"], "d1");
        assert!(json["numbers"].as_array().unwrap().is_empty());

        let value = serde_json::to_value(Status::Yellow).unwrap();
        assert_eq!(value, "yellow");
        let value = serde_json::to_value(SourceQuality::Blocked).unwrap();
        assert_eq!(value, "blocked");
    }
}
