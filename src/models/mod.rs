//! Request and Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for query
//! strings and JSON response bodies. Payloads themselves travel as raw bytes.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FetchQuery, KeyQuery};
pub use responses::{HealthResponse, PutResponse, StatsResponse};
