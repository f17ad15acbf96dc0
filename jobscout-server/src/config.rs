//! Server configuration
//!
//! Bind address and catalog location, read from the environment.

use std::path::PathBuf;

/// Default port when neither `JOBSCOUT_BIND_ADDR` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub bind_addr: String,

    /// JSON file holding the job catalog; the built-in sample when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{}", DEFAULT_PORT),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JOBSCOUT_BIND_ADDR (optional, host:port)
    /// - PORT (optional, used when JOBSCOUT_BIND_ADDR is unset, default: 3000)
    /// - JOBSCOUT_CATALOG (optional, path to a JSON array of job records)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match lookup("JOBSCOUT_BIND_ADDR") {
            Some(addr) => addr,
            None => {
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .parse::<u16>()
                        .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{}'", raw))?,
                    None => DEFAULT_PORT,
                };
                format!("0.0.0.0:{}", port)
            }
        };

        let catalog_path = lookup("JOBSCOUT_CATALOG")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.bind_addr.contains(':') {
            anyhow::bail!("bind_addr must be host:port, got '{}'", self.bind_addr);
        }

        Ok(())
    }
}
