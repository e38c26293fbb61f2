//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds; also the sweep period
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upstream request timeout in seconds for read-through fetches
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL and sweep period (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FETCH_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    ///
    /// Unparseable values and a zero TTL or timeout fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: positive_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            fetch_timeout: positive_var("FETCH_TIMEOUT_SECS").unwrap_or(defaults.fetch_timeout),
        }
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn fetch_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            server_port: 3000,
            fetch_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn positive_var(name: &str) -> Option<u64> {
    parse_var::<u64>(name).filter(|v| *v > 0)
}
