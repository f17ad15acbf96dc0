//! Core domain types
//!
//! This module contains the domain structures shared between the server
//! (which filters the catalog) and the client (which sorts, filters and
//! paginates the returned result set). Both sides apply the same rules, so
//! the rules live here next to the types.

pub mod criteria;
pub mod filter;
pub mod heuristics;
pub mod job;
