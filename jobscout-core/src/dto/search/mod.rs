//! Search DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobRecord;

/// Request body of `POST /api/jobs`
///
/// `{ keyword, location, sources, filters: { datePosted, jobTypes, experienceLevels } }`
pub use crate::domain::criteria::SearchCriteria as SearchRequest;

/// Response body of `POST /api/jobs`: the full, unpaginated match list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobRecord>,
}

impl From<Vec<JobRecord>> for SearchResponse {
    fn from(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }
}
