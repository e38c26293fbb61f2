//! Pokecache - A time-bounded in-memory response cache
//!
//! Stores opaque byte payloads under string keys, expires them after a fixed
//! TTL through a background sweep, and serves them over HTTP with a
//! read-through fetch endpoint.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use config::Config;
pub use fetch::{CacheStatus, CachedFetcher, Fetched};
