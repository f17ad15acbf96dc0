//! Search Service
//!
//! Resolves search criteria against the catalog.

use jobscout_core::catalog::Catalog;
use jobscout_core::domain::criteria::SearchCriteria;
use jobscout_core::domain::job::JobRecord;

/// Every record matching keyword, location, sources and filters.
///
/// Criteria are not validated: a request with no keyword and no location
/// returns the whole catalog narrowed by sources and filters.
pub fn search(catalog: &Catalog, criteria: &SearchCriteria) -> Vec<JobRecord> {
    if !criteria.has_terms() {
        tracing::warn!("Search without keyword or location");
    }

    let jobs = catalog.search(criteria);

    tracing::debug!(
        "Matched {} of {} job(s) (filters: {:?})",
        jobs.len(),
        catalog.len(),
        criteria.filters
    );

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::domain::filter::DatePosted;
    use jobscout_core::domain::job::Source;

    #[test]
    fn test_search_matches_core_rules() {
        let catalog = Catalog::sample();
        let mut criteria = SearchCriteria::new("", "").with_sources([Source::Glassdoor]);
        criteria.filters.date_posted = DatePosted::Week;

        let jobs = search(&catalog, &criteria);
        let ids: Vec<u32> = jobs.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![2, 4, 6, 8, 10]);
        assert_eq!(jobs, catalog.search(&criteria));
    }

    #[test]
    fn test_search_without_terms_returns_everything() {
        let catalog = Catalog::sample();
        let jobs = search(&catalog, &SearchCriteria::default());
        assert_eq!(jobs.len(), catalog.len());
    }

    #[test]
    fn test_sources_narrow_once() {
        let catalog = Catalog::sample();

        let indeed = search(
            &catalog,
            &SearchCriteria::default().with_sources([Source::Indeed]),
        );
        assert_eq!(indeed.len(), 5);
        assert!(indeed.iter().all(|job| job.source == Source::Indeed));

        let unconstrained = search(
            &catalog,
            &SearchCriteria::default().with_sources(Vec::<Source>::new()),
        );
        assert_eq!(unconstrained.len(), catalog.len());
    }
}
