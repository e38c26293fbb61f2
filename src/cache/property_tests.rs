//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check lookup, overwrite and key isolation behavior over
//! arbitrary keys and payloads.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::ExpiringCache;

// == Test Configuration ==
// Long enough that no sweep runs while a case executes.
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates keys shaped like request URLs, plus a few arbitrary strings
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "https://pokeapi\\.co/api/v2/[a-z\\-]{1,16}/[0-9]{0,3}",
        ".{0,32}",
    ]
}

/// Generates opaque payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, payload: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Put { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

/// Runs `f` against a fresh cache inside a throwaway runtime.
fn with_cache<F>(f: F)
where
    F: FnOnce(&ExpiringCache),
{
    tokio_test::block_on(async {
        let cache = ExpiringCache::new(TEST_TTL);
        f(&cache);
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any put is immediately visible to a get on the same key.
    #[test]
    fn prop_put_then_get(key in key_strategy(), payload in payload_strategy()) {
        with_cache(|cache| {
            cache.put(key.clone(), payload.clone());
            let stored = cache.get(&key).expect("key should be present after put");
            assert_eq!(stored.as_ref(), payload.as_slice());
        });
    }

    // A second put replaces the first payload entirely.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        with_cache(|cache| {
            cache.put(key.clone(), first);
            cache.put(key.clone(), second.clone());

            assert_eq!(cache.get(&key).unwrap().as_ref(), second.as_slice());
            assert_eq!(cache.len(), 1);
        });
    }

    // Writing one key never changes what another key returns.
    #[test]
    fn prop_independent_keys(
        k1 in key_strategy(),
        k2 in key_strategy(),
        payload in payload_strategy()
    ) {
        prop_assume!(k1 != k2);
        with_cache(|cache| {
            let before = cache.get(&k2);
            cache.put(k1.clone(), payload);
            assert_eq!(cache.get(&k2), before);
            assert!(cache.get(&k2).is_none());
        });
    }

    // The cache agrees with a plain map model, and stats count every lookup.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        with_cache(|cache| {
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();
            let mut expected_hits = 0u64;
            let mut expected_misses = 0u64;

            for op in ops {
                match op {
                    CacheOp::Put { key, payload } => {
                        cache.put(key.clone(), payload.clone());
                        model.insert(key, payload);
                    }
                    CacheOp::Get { key } => {
                        let actual = cache.get(&key);
                        match model.get(&key) {
                            Some(expected) => {
                                expected_hits += 1;
                                assert_eq!(actual.unwrap().as_ref(), expected.as_slice());
                            }
                            None => {
                                expected_misses += 1;
                                assert!(actual.is_none());
                            }
                        }
                    }
                }
            }

            let stats = cache.stats();
            assert_eq!(stats.hits, expected_hits, "Hits mismatch");
            assert_eq!(stats.misses, expected_misses, "Misses mismatch");
            assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
            assert_eq!(stats.swept, 0);
        });
    }
}
