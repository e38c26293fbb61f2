//! Read-through Fetcher
//!
//! Looks a URL up in the cache before going to the network, and stores the
//! response body on a miss. The URL string is the cache key, unmodified.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::error::{Result, ServiceError};

/// Where a fetched payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Miss => "miss",
        }
    }
}

/// A payload returned by [`CachedFetcher::fetch`].
#[derive(Debug, Clone)]
pub struct Fetched {
    pub body: Bytes,
    pub status: CacheStatus,
}

/// HTTP client fronted by an [`ExpiringCache`].
///
/// Only successful responses are cached. Transport failures and non-2xx
/// statuses are returned as errors and leave the cache untouched.
#[derive(Debug, Clone)]
pub struct CachedFetcher {
    cache: Arc<ExpiringCache>,
    client: reqwest::Client,
}

impl CachedFetcher {
    /// Creates a fetcher whose upstream requests give up after `timeout`.
    pub fn new(cache: Arc<ExpiringCache>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(cache, client))
    }

    pub fn with_client(cache: Arc<ExpiringCache>, client: reqwest::Client) -> Self {
        Self { cache, client }
    }

    pub fn cache(&self) -> &Arc<ExpiringCache> {
        &self.cache
    }

    /// Returns the body for `url`, from the cache when possible.
    ///
    /// Two concurrent misses on the same URL both go upstream; the later
    /// `put` wins.
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(Fetched {
                body,
                status: CacheStatus::Hit,
            });
        }

        debug!("Cache miss for {}, fetching upstream", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}, not caching", status, url);
            return Err(ServiceError::Upstream {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.put(url, body.clone());

        Ok(Fetched {
            body,
            status: CacheStatus::Miss,
        })
    }
}
