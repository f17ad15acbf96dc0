//! Job sources
//!
//! A [`JobSource`] resolves search criteria to the full list of matching
//! job records. The live source is the JobScout server; the local source
//! searches the shared sample catalog in-process and never fails.

use async_trait::async_trait;
use jobscout_core::catalog::Catalog;
use jobscout_core::domain::criteria::SearchCriteria;
use jobscout_core::domain::job::JobRecord;

use crate::JobSearchClient;
use crate::error::Result;

/// Anything that can answer a search
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Fetch every job matching the criteria
    ///
    /// No pagination or sorting: the caller receives the full result set.
    async fn fetch(&self, criteria: &SearchCriteria) -> Result<Vec<JobRecord>>;
}

#[async_trait]
impl JobSource for JobSearchClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, criteria: &SearchCriteria) -> Result<Vec<JobRecord>> {
        let response = self.search_jobs(criteria).await?;
        Ok(response.jobs)
    }
}

/// In-process search over a catalog
///
/// Applies exactly the rules the server applies, so a degraded result looks
/// like a live one.
#[derive(Debug, Clone)]
pub struct LocalJobSource {
    catalog: Catalog,
}

impl LocalJobSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Search synchronously
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<JobRecord> {
        self.catalog.search(criteria)
    }
}

impl Default for LocalJobSource {
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

#[async_trait]
impl JobSource for LocalJobSource {
    fn name(&self) -> &str {
        "local"
    }

    async fn fetch(&self, criteria: &SearchCriteria) -> Result<Vec<JobRecord>> {
        Ok(self.search(criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use jobscout_core::domain::job::Source;
    use jobscout_core::dto::search::{SearchRequest, SearchResponse};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_source_posts_criteria() {
        let router = Router::new().route(
            "/api/jobs",
            post(|Json(req): Json<SearchRequest>| async move {
                Json(SearchResponse::from(Catalog::sample().search(&req)))
            }),
        );
        let client = JobSearchClient::new(spawn_server(router).await);

        let criteria = SearchCriteria::new("developer", "").with_sources([Source::Indeed]);
        let jobs = client.fetch(&criteria).await.unwrap();

        let ids: Vec<u32> = jobs.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![1, 3, 9]);
    }

    #[tokio::test]
    async fn test_http_source_non_success_status_is_error() {
        let router = Router::new().route(
            "/api/jobs",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = JobSearchClient::new(spawn_server(router).await);

        let err = client
            .fetch(&SearchCriteria::new("developer", ""))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_http_source_malformed_body_is_parse_error() {
        let router = Router::new().route("/api/jobs", post(|| async { "not json" }));
        let client = JobSearchClient::new(spawn_server(router).await);

        let err = client
            .fetch(&SearchCriteria::new("developer", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_http_source_accepts_unknown_source_tag() {
        const BODY: &str = r##"{"jobs": [{
            "id": 1,
            "title": "Platform Engineer",
            "company": "Boardly",
            "location": "Remote",
            "salary": "$140,000",
            "jobType": "Full-time",
            "datePosted": "Just now",
            "description": "Keep the lights on.",
            "requirements": [],
            "source": "linkedin",
            "url": "#"
        }]}"##;
        let router = Router::new().route("/api/jobs", post(|| async { BODY }));
        let client = JobSearchClient::new(spawn_server(router).await);

        let jobs = client
            .fetch(&SearchCriteria::new("engineer", ""))
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, Source::Other);
    }

    #[tokio::test]
    async fn test_local_source_matches_catalog_search() {
        let local = LocalJobSource::default();
        let criteria = SearchCriteria::new("", "CA");

        let jobs = local.fetch(&criteria).await.unwrap();
        assert_eq!(jobs, Catalog::sample().search(&criteria));
        assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 6, 9]);
    }
}
