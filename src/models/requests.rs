//! Request DTOs for the cache service API
//!
//! Defines the query strings accepted by the endpoints.

use serde::Deserialize;

/// Query for `GET /entries` and `PUT /entries`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    /// The cache key, used verbatim
    pub key: String,
}

impl KeyQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Query for `GET /fetch`
#[derive(Debug, Clone, Deserialize)]
pub struct FetchQuery {
    /// Absolute http(s) URL to fetch; doubles as the cache key
    pub url: String,
}

impl FetchQuery {
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Some("URL must start with http:// or https://".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_query_deserialize() {
        let json = r#"{"key": "https://pokeapi.co/api/v2/pokemon/1"}"#;
        let query: KeyQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.key, "https://pokeapi.co/api/v2/pokemon/1");
        assert!(query.validate().is_none());
    }

    #[test]
    fn test_validate_empty_key() {
        let query = KeyQuery { key: String::new() };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_validate_fetch_url() {
        let ok = FetchQuery {
            url: "https://pokeapi.co/api/v2/location-area/".to_string(),
        };
        assert!(ok.validate().is_none());

        let relative = FetchQuery {
            url: "/api/v2/location-area/".to_string(),
        };
        assert!(relative.validate().is_some());

        let ftp = FetchQuery {
            url: "ftp://example.com/file".to_string(),
        };
        assert!(ftp.validate().is_some());

        let empty = FetchQuery { url: String::new() };
        assert_eq!(empty.validate().unwrap(), "URL cannot be empty");
    }
}
