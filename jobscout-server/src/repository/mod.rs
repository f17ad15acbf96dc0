//! Repository Module
//!
//! Data access layer for the server. The catalog lives in memory; this
//! layer loads it from the built-in sample or a JSON file.

pub mod catalog;

// Re-export for convenience
pub use catalog as catalog_repository;
