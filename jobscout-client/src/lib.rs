//! JobScout Client
//!
//! Client side of the JobScout job-search aggregator.
//!
//! This crate provides:
//! - [`JobSearchClient`]: a typed HTTP client for the JobScout server API
//! - [`JobSource`]: the seam between searching and where results come from,
//!   with an HTTP implementation and a local fallback over the sample catalog
//! - [`SearchClient`]: validates criteria, queries a source and falls back to
//!   local results when the source fails
//! - [`ResultManager`]: owns the current result set and derives the visible
//!   page under the active sort order, filters and page number
//! - [`view`]: render-ready view models built from a `ResultManager`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use jobscout_client::{JobSearchClient, ResultManager, SearchClient};
//! use jobscout_core::domain::criteria::SearchCriteria;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let http = JobSearchClient::new("http://localhost:3000");
//!     let searcher = SearchClient::new(Arc::new(http));
//!
//!     let outcome = searcher.submit_search(SearchCriteria::new("engineer", "")).await?;
//!
//!     let mut results = ResultManager::new();
//!     results.load(outcome);
//!     for job in results.current_page() {
//!         println!("{} at {}", job.title, job.company);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod results;
mod search;
pub mod search_client;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use error::{ClientError, Result, ValidationError};
pub use results::{PAGE_SIZE, ResultManager, SortKey};
pub use search_client::{SearchClient, SearchMode, SearchOutcome};
pub use source::{JobSource, LocalJobSource};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the JobScout server API
#[derive(Debug, Clone)]
pub struct JobSearchClient {
    /// Base URL of the server (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JobSearchClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server (e.g., "http://localhost:3000")
    ///
    /// # Example
    /// ```
    /// use jobscout_client::JobSearchClient;
    ///
    /// let client = JobSearchClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use jobscout_client::JobSearchClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = JobSearchClient::with_client("http://localhost:3000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Any non-2xx status is an error, whatever the body says.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JobSearchClient::new("http://localhost:3000");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JobSearchClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = JobSearchClient::with_client("http://localhost:3000", http_client);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
