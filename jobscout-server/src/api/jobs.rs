//! Job Search API Handler
//!
//! `POST /api/jobs`: criteria in, every matching job out. No pagination and
//! no sorting happen here; the client owns both.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use jobscout_core::catalog::Catalog;
use jobscout_core::dto::search::{SearchRequest, SearchResponse};

use crate::api::error::ApiResult;
use crate::service::search_service;

/// POST /api/jobs
/// Search the catalog
pub async fn search_jobs(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(req) = payload?;

    tracing::info!(
        "Searching jobs: keyword='{}' location='{}' sources={:?}",
        req.keyword,
        req.location,
        req.sources
    );

    let jobs = search_service::search(&catalog, &req);

    Ok(Json(SearchResponse::from(jobs)))
}
