//! Cache Module
//!
//! Provides an in-memory byte cache whose entries expire after a fixed TTL and
//! are reclaimed by a background sweep.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use stats::CacheStats;
pub use store::{ExpiringCache, MIN_TTL};

pub(crate) use entry::CacheEntry;
pub(crate) use store::Shared;
