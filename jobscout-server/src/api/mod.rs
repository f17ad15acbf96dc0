//! API Module
//!
//! HTTP API layer for the JobScout server.

pub mod error;
pub mod health;
pub mod jobs;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use jobscout_core::catalog::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(catalog: Catalog) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Search endpoint
        .route("/api/jobs", post(jobs::search_jobs))
        .fallback(error::not_found)
        // Add state and middleware
        .with_state(Arc::new(catalog))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
