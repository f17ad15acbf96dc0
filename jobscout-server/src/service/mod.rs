//! Service Module
//!
//! Business logic layer for the server.

pub mod search;

// Re-export for convenience
pub use search as search_service;
