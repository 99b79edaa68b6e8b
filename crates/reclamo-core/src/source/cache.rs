use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Short-lived byte cache keyed by source identifier.
///
/// Entries hold raw fetched bytes, never normalized records:
/// normalization re-runs on every read, so the randomized record fields
/// re-roll even on a cache hit.
#[derive(Debug)]
pub struct SourceCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    stored_at: Instant,
    bytes: Arc<Vec<u8>>,
}

impl SourceCache {
    pub fn new(ttl: Duration) -> SourceCache {
        SourceCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Cached bytes for `key`, unless the entry has expired.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(Arc::clone(&entry.bytes))
    }

    pub fn insert(&mut self, key: &str, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        let bytes = Arc::new(bytes);
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                bytes: Arc::clone(&bytes),
            },
        );
        bytes
    }

    /// Drop entries past their TTL so the map does not grow unbounded.
    pub fn evict_expired(&mut self) {
        self.entries.retain(|_, e| e.stored_at.elapsed() <= self.ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
