//! Data Transfer Objects for client/server communication
//!
//! The wire contract of `POST /api/jobs`. Field names are camelCase on the
//! wire to match the JSON contract consumed by existing front ends.

pub mod search;
