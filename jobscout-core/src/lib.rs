//! JobScout Core
//!
//! Core types and shared logic for the JobScout job-search aggregator.
//!
//! This crate contains:
//! - Domain types: job records, search criteria and filter state
//! - Matching rules and the free-text recency/salary heuristics
//! - The shared sample catalog served by the Job Source
//! - DTOs: the wire contract between client and server

pub mod catalog;
pub mod domain;
pub mod dto;
