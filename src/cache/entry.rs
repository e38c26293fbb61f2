//! Cache Entry Module
//!
//! Defines a single stored payload together with the moment it was inserted.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its creation time.
///
/// Entries are never mutated in place. Overwriting a key replaces the whole
/// entry, which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, kept verbatim
    pub payload: Bytes,
    /// Moment the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted, measured against `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// considered live. Only a strictly greater age makes it eligible for
    /// removal.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_payload_verbatim() {
        let entry = CacheEntry::new(Bytes::from_static(&[1, 2, 3]));
        assert_eq!(entry.payload.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_entry_empty_payload() {
        let entry = CacheEntry::new(Bytes::new());
        assert!(entry.payload.is_empty());
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new(Bytes::from_static(b"fresh"));
        assert!(!entry.is_expired(Duration::from_secs(60), Instant::now()));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry {
            payload: Bytes::from_static(b"edge"),
            created_at: now,
        };
        let ttl = Duration::from_millis(50);

        assert!(!entry.is_expired(ttl, now + ttl), "Age equal to TTL is live");
        assert!(entry.is_expired(ttl, now + ttl + Duration::from_millis(1)));
    }

    #[test]
    fn test_age_never_negative() {
        let now = Instant::now();
        let entry = CacheEntry {
            payload: Bytes::new(),
            created_at: now + Duration::from_secs(5),
        };
        assert_eq!(entry.age(now), Duration::ZERO);
    }
}
