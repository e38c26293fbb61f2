//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::fetch::CachedFetcher;
use crate::models::{FetchQuery, HealthResponse, KeyQuery, PutResponse, StatsResponse};

/// Response header reporting whether `/fetch` was served from the cache.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

const OCTET_STREAM: &str = "application/octet-stream";

/// Application state shared across all handlers.
///
/// The cache is shared with the fetcher, so payloads stored through
/// `PUT /entries` are visible to `/fetch` and the other way round.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ExpiringCache>,
    pub fetcher: CachedFetcher,
}

impl AppState {
    /// Creates a new AppState around the given cache with a default HTTP client.
    pub fn new(cache: ExpiringCache) -> Self {
        let cache = Arc::new(cache);
        let fetcher = CachedFetcher::with_client(cache.clone(), reqwest::Client::new());
        Self { cache, fetcher }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called from within the tokio runtime that will run the sweeper.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(ExpiringCache::new(config.cache_ttl_duration()));
        let fetcher = CachedFetcher::new(cache.clone(), config.fetch_timeout_duration())?;
        Ok(Self { cache, fetcher })
    }
}

/// Handler for GET /fetch?url=
///
/// Serves the URL body from the cache, or fetches and caches it on a miss.
pub async fn fetch_handler(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Response> {
    if let Some(error_msg) = query.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let fetched = state.fetcher.fetch(&query.url).await?;

    Ok((
        [
            (header::CONTENT_TYPE, OCTET_STREAM),
            (X_CACHE, fetched.status.as_str()),
        ],
        fetched.body,
    )
        .into_response())
}

/// Handler for GET /entries?key=
///
/// Returns the raw payload stored under the key.
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Response> {
    if let Some(error_msg) = query.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let payload = state
        .cache
        .get(&query.key)
        .ok_or_else(|| ServiceError::NotFound(query.key.clone()))?;

    Ok(([(header::CONTENT_TYPE, OCTET_STREAM)], payload).into_response())
}

/// Handler for PUT /entries?key=
///
/// Stores the raw request body under the key, replacing any previous payload.
pub async fn put_entry_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    body: Bytes,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let size = body.len();
    state.cache.put(query.key.clone(), body);

    Ok(Json(PutResponse::new(query.key, size)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
