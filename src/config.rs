use crate::error::VerifyError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the document export host
pub const DOCS_BASE_URL_ENV: &str = "CLAIM_CHECK_DOCS_BASE_URL";

/// Configuration for a verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Timeout for each individual fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Maximum number of redirects followed per fetch
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base URL of the document export service
    #[serde(default = "default_docs_base_url")]
    pub docs_base_url: String,
}

/// Default value for fetch_timeout_secs
fn default_fetch_timeout_secs() -> u64 {
    20
}

/// Default value for max_redirects
fn default_max_redirects() -> usize {
    10
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("claim-check/{}", env!("CARGO_PKG_VERSION"))
}

/// Default value for docs_base_url
fn default_docs_base_url() -> String {
    "https://docs.google.com".to_string()
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            docs_base_url: default_docs_base_url(),
        }
    }
}

impl VerifierConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VerifyError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, VerifyError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base) = std::env::var(DOCS_BASE_URL_ENV) {
            if !base.is_empty() {
                ::log::debug!("Using document base URL from environment: {}", base);
                self.docs_base_url = base;
            }
        }
        self
    }

    /// Per-fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
