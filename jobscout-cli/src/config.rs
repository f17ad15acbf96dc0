//! Configuration module
//!
//! Handles CLI configuration and builds the search client from it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use jobscout_client::{JobSearchClient, JobSource, LocalJobSource, SearchClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the JobScout server
    pub server_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Skip the server and search the sample catalog
    pub offline: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server URL must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build the search client for this configuration
    pub fn search_client(&self) -> Result<SearchClient> {
        let source: Arc<dyn JobSource> = if self.offline {
            Arc::new(LocalJobSource::default())
        } else {
            let http = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .context("Failed to build HTTP client")?;
            Arc::new(JobSearchClient::with_client(&self.server_url, http))
        };

        Ok(SearchClient::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
            offline: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.server_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.server_url = "https://jobs.example.com".to_string();
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_client_builds() {
        assert!(config().search_client().is_ok());

        let offline = Config {
            offline: true,
            ..config()
        };
        assert!(offline.search_client().is_ok());
    }
}
