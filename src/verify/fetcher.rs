use crate::config::VerifierConfig;
use reqwest::{Client, redirect};
use thiserror::Error;

/// Why a linked page could not be retrieved.
///
/// Cloneable so a failure can be cached and reported once per URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("timeout")]
    Timeout,

    #[error("connection failed")]
    Connect,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Other(err.to_string())
        }
    }
}

/// Build the HTTP client shared by every request of a run
pub fn build_client(config: &VerifierConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.fetch_timeout())
        .redirect(redirect::Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.clone())
        .build()
}

/// Performs single GET requests for linked evidence pages
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a page body. Non-2xx responses count as failures.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        ::log::trace!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
