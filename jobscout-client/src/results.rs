//! Result manager
//!
//! Owns the result set of the last search and the view state on top of it:
//! sort key, filters and current page. The visible page is always derived
//! from the full result set, so sort, filter and page actions never need to
//! query the source again and filters never stack across applications.
//!
//! Not designed for concurrent mutation. Callers that can run handlers
//! concurrently must serialize access (the `&mut self` receivers already
//! enforce a single writer in safe code).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use jobscout_core::domain::filter::FilterState;
use jobscout_core::domain::job::JobRecord;
use tracing::debug;

use crate::search_client::SearchOutcome;

/// Jobs per page
pub const PAGE_SIZE: usize = 10;

/// Sort order of the result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by id
    #[default]
    Relevance,
    /// Most recent first, by the recency heuristic
    Date,
    /// Highest first, by the salary heuristic
    Salary,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Relevance => "relevance",
            SortKey::Date => "date",
            SortKey::Salary => "salary",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "date" => Ok(SortKey::Date),
            "salary" => Ok(SortKey::Salary),
            other => Err(format!(
                "Unknown sort key '{}' (expected relevance, date or salary)",
                other
            )),
        }
    }
}

/// Current result set plus sort/filter/page view state
#[derive(Debug, Clone)]
pub struct ResultManager {
    all_results: Vec<JobRecord>,
    sort_key: SortKey,
    filters: FilterState,
    /// 1-based
    page: usize,
    /// Generation of the last outcome accepted by `load`
    generation: u64,
}

impl Default for ResultManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultManager {
    /// Empty result set on page 1
    pub fn new() -> Self {
        Self {
            all_results: Vec::new(),
            sort_key: SortKey::Relevance,
            filters: FilterState::default(),
            page: 1,
            generation: 0,
        }
    }

    // =============================================================================
    // Result Set
    // =============================================================================

    /// Replace the result set wholesale.
    ///
    /// Page goes back to 1 and the sort key to relevance; records keep the
    /// order they arrived in. Filters are left as they are.
    pub fn set_results(&mut self, records: Vec<JobRecord>) {
        debug!("Replacing result set with {} job(s)", records.len());
        self.all_results = records;
        self.page = 1;
        self.sort_key = SortKey::Relevance;
    }

    /// Accept a search outcome unless a newer one was already accepted.
    ///
    /// Returns `false` and leaves the state untouched for a stale outcome.
    pub fn load(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.generation < self.generation {
            debug!(
                "Discarding stale search #{} (showing #{})",
                outcome.generation, self.generation
            );
            return false;
        }
        self.generation = outcome.generation;
        self.set_results(outcome.jobs);
        true
    }

    /// Every record of the last search, in current sort order, unfiltered
    pub fn all_results(&self) -> &[JobRecord] {
        &self.all_results
    }

    /// Look up a record of the current result set by id
    pub fn find(&self, id: u32) -> Option<&JobRecord> {
        self.all_results.iter().find(|job| job.id == id)
    }

    // =============================================================================
    // Sort & Filter
    // =============================================================================

    /// Reorder the result set and go back to page 1.
    ///
    /// Records the heuristics cannot read (no leading number for date, no
    /// digit for salary) sort after every readable one, in stable order.
    pub fn apply_sort(&mut self, key: SortKey) {
        match key {
            SortKey::Relevance => self.all_results.sort_by_key(|job| job.id),
            SortKey::Date => self.all_results.sort_by_key(|job| {
                let days = job.recency_days();
                (days.is_none(), days.unwrap_or_default())
            }),
            SortKey::Salary => self
                .all_results
                .sort_by(|a, b| salary_descending(a.salary_key(), b.salary_key())),
        }
        self.sort_key = key;
        self.page = 1;
    }

    /// Replace the filters, go back to page 1 and return the new view.
    ///
    /// The view is recomputed from the full result set every time; applying
    /// the same filters twice yields the same view.
    pub fn apply_filters(&mut self, filters: FilterState) -> Vec<&JobRecord> {
        self.filters = filters;
        self.page = 1;
        self.view()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The sorted and filtered records, before pagination
    pub fn view(&self) -> Vec<&JobRecord> {
        self.all_results
            .iter()
            .filter(|job| self.filters.matches(job))
            .collect()
    }

    /// Number of records in the view
    pub fn total(&self) -> usize {
        self.all_results
            .iter()
            .filter(|job| self.filters.matches(job))
            .count()
    }

    // =============================================================================
    // Pagination
    // =============================================================================

    /// Records on the current page, clipped to the view; empty when the page
    /// is out of range
    pub fn current_page(&self) -> Vec<&JobRecord> {
        if self.page == 0 {
            return Vec::new();
        }
        let start = (self.page - 1).saturating_mul(PAGE_SIZE);
        self.view().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    /// Jump to page `n` (1-based); not bounds-checked
    pub fn set_page(&mut self, n: usize) {
        self.page = n;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Pages in the view; 0 when the view is empty
    pub fn page_count(&self) -> usize {
        self.total().div_ceil(PAGE_SIZE)
    }
}

/// Descending by salary key, unreadable salaries last
fn salary_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
