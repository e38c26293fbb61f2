//! API Module
//!
//! HTTP handlers and routing for the cache service.
//!
//! # Endpoints
//! - `GET /fetch?url=` - Read-through fetch of a URL
//! - `GET /entries?key=` - Retrieve a raw payload by key
//! - `PUT /entries?key=` - Store the request body under a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
