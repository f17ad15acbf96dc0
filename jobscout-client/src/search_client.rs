//! Search client
//!
//! Validates criteria, asks a [`JobSource`] for results and keeps the UI
//! populated when that source fails by searching the local catalog instead.
//!
//! Every submitted search is stamped with a generation number. Searches are
//! not cancelled, so a slow response can arrive after a newer one; the
//! [`crate::ResultManager`] uses the generation to drop such stale outcomes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use jobscout_core::domain::criteria::SearchCriteria;
use jobscout_core::domain::job::JobRecord;
use tracing::{debug, info, warn};

use crate::error::ValidationError;
use crate::source::{JobSource, LocalJobSource};

/// Where a search result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Answered by the configured source
    Live,
    /// The source failed; results come from the local fallback catalog
    Degraded,
}

/// Result of one `submit_search` call
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Monotonic per client, starting at 1
    pub generation: u64,
    pub mode: SearchMode,
    pub jobs: Vec<JobRecord>,
}

impl SearchOutcome {
    pub fn is_degraded(&self) -> bool {
        self.mode == SearchMode::Degraded
    }
}

/// Criteria → result set, with validation and degraded-mode fallback
pub struct SearchClient {
    source: Arc<dyn JobSource>,
    fallback: LocalJobSource,
    generation: AtomicU64,
}

impl SearchClient {
    /// Search through `source`, falling back to the sample catalog
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self {
            source,
            fallback: LocalJobSource::default(),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the fallback catalog
    pub fn with_fallback(mut self, fallback: LocalJobSource) -> Self {
        self.fallback = fallback;
        self
    }

    /// Check criteria before any request is made
    pub fn validate(criteria: &SearchCriteria) -> Result<(), ValidationError> {
        if !criteria.has_terms() {
            return Err(ValidationError::MissingKeywordAndLocation);
        }
        if criteria.sources.is_empty() {
            return Err(ValidationError::NoSources);
        }
        Ok(())
    }

    /// Validate, query the source and return the full result set.
    ///
    /// Keyword and location are trimmed first. A validation failure issues no
    /// request. A transport or parse failure is logged and answered from the
    /// local fallback with [`SearchMode::Degraded`]; it is never returned.
    pub async fn submit_search(
        &self,
        criteria: SearchCriteria,
    ) -> Result<SearchOutcome, ValidationError> {
        let criteria = criteria.trimmed();
        Self::validate(&criteria)?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Search #{} via {}: keyword='{}' location='{}'",
            generation,
            self.source.name(),
            criteria.keyword,
            criteria.location
        );

        let (mode, jobs) = match self.source.fetch(&criteria).await {
            Ok(jobs) => (SearchMode::Live, jobs),
            Err(err) => {
                warn!(
                    "Search #{} failed ({}), using local sample data",
                    generation, err
                );
                (SearchMode::Degraded, self.fallback.search(&criteria))
            }
        };

        info!("Search #{} returned {} job(s)", generation, jobs.len());

        Ok(SearchOutcome {
            generation,
            mode,
            jobs,
        })
    }

    /// Generation of the most recently submitted search, 0 if none
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
