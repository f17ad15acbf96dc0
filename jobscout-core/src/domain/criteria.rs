//! Search criteria
//!
//! What the user asks for: keyword, location, origin tags and filters.
//! The same value is the JSON request body of `POST /api/jobs`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::filter::FilterState;
use crate::domain::job::{JobRecord, Source};

/// User-supplied search input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub keyword: String,
    pub location: String,
    pub sources: BTreeSet<Source>,
    pub filters: FilterState,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            location: String::new(),
            sources: Source::ALL.into_iter().collect(),
            filters: FilterState::default(),
        }
    }
}

impl SearchCriteria {
    /// Criteria with the given keyword and location, every source, no filters
    pub fn new(keyword: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// Restrict to the given sources
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// Replace the filters
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Same criteria with surrounding whitespace removed from the text fields
    pub fn trimmed(mut self) -> Self {
        self.keyword = self.keyword.trim().to_string();
        self.location = self.location.trim().to_string();
        self
    }

    /// Whether a keyword or a location was given
    pub fn has_terms(&self) -> bool {
        !self.keyword.is_empty() || !self.location.is_empty()
    }

    /// Keyword, location and source rules.
    ///
    /// - keyword: case-insensitive substring of title, company or description
    /// - location: case-insensitive substring of location
    /// - sources: membership, skipped when the set is empty
    pub fn matches_terms(&self, job: &JobRecord) -> bool {
        if !self.keyword.is_empty() {
            let keyword = self.keyword.to_lowercase();
            let hit = job.title.to_lowercase().contains(&keyword)
                || job.company.to_lowercase().contains(&keyword)
                || job.description.to_lowercase().contains(&keyword);
            if !hit {
                return false;
            }
        }

        if !self.location.is_empty()
            && !job
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }

        self.sources.is_empty() || self.sources.contains(&job.source)
    }

    /// Terms and filters together
    pub fn matches(&self, job: &JobRecord) -> bool {
        self.matches_terms(job) && self.filters.matches(job)
    }

    /// Every record that matches, in catalog order
    pub fn select<'a, I>(&self, records: I) -> Vec<JobRecord>
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        records
            .into_iter()
            .filter(|job| self.matches(job))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::filter::DatePosted;

    #[test]
    fn test_keyword_matches_title_company_and_description() {
        let catalog = Catalog::sample();

        let by_title = SearchCriteria::new("devops", "").select(catalog.records());
        assert_eq!(by_title.iter().map(|j| j.id).collect::<Vec<_>>(), vec![4]);

        let by_company = SearchCriteria::new("analyticspro", "").select(catalog.records());
        assert_eq!(by_company.iter().map(|j| j.id).collect::<Vec<_>>(), vec![6]);

        let by_description = SearchCriteria::new("Kubernetes", "").select(catalog.records());
        assert!(by_description.is_empty(), "requirements are not searched");
    }

    #[test]
    fn test_location_and_sources() {
        let catalog = Catalog::sample();

        let remote = SearchCriteria::new("", "remote").select(catalog.records());
        assert_eq!(remote.iter().map(|j| j.id).collect::<Vec<_>>(), vec![2, 10]);

        let remote_indeed = SearchCriteria::new("", "remote")
            .with_sources([Source::Indeed])
            .select(catalog.records());
        assert!(remote_indeed.is_empty());
    }

    #[test]
    fn test_empty_sources_do_not_constrain() {
        let catalog = Catalog::sample();
        let criteria = SearchCriteria::new("", "").with_sources(Vec::<Source>::new());
        assert_eq!(criteria.select(catalog.records()).len(), catalog.len());
    }

    #[test]
    fn test_filters_apply_after_terms() {
        let catalog = Catalog::sample();
        let mut filters = FilterState::default();
        filters.date_posted = DatePosted::Day;

        let fresh = SearchCriteria::new("", "")
            .with_filters(filters)
            .select(catalog.records());
        assert_eq!(fresh.iter().map(|j| j.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_missing_request_fields_default() {
        let criteria: SearchCriteria =
            serde_json::from_value(serde_json::json!({ "keyword": "engineer" })).unwrap();

        assert_eq!(criteria.keyword, "engineer");
        assert_eq!(criteria.location, "");
        assert_eq!(criteria.sources.len(), Source::ALL.len());
        assert_eq!(criteria.filters, FilterState::default());
    }

    #[test]
    fn test_trimmed() {
        let criteria = SearchCriteria::new("  rust ", "\t").trimmed();
        assert_eq!(criteria.keyword, "rust");
        assert!(criteria.location.is_empty());
        assert!(criteria.has_terms());
    }
}
