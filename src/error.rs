use thiserror::Error;

/// Errors that abort a verification run.
///
/// Problems with individual linked pages never show up here; they are
/// folded into link and claim statuses instead.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid document URL: {0}")]
    InvalidDocumentUrl(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(reqwest::Error),

    #[error("Document fetch failed: {0}")]
    DocumentFetch(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
