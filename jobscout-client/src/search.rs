//! Search API endpoint

use crate::JobSearchClient;
use crate::error::Result;
use jobscout_core::dto::search::{SearchRequest, SearchResponse};

impl JobSearchClient {
    /// Run a search on the server
    ///
    /// # Arguments
    /// * `req` - Keyword, location, sources and filters
    ///
    /// # Returns
    /// Every matching job; the server does not paginate or sort
    ///
    /// # Example
    /// ```no_run
    /// # use jobscout_client::JobSearchClient;
    /// # use jobscout_core::dto::search::SearchRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JobSearchClient::new("http://localhost:3000");
    /// let response = client.search_jobs(&SearchRequest::new("engineer", "Remote")).await?;
    /// println!("{} jobs", response.jobs.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_jobs(&self, req: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }
}
