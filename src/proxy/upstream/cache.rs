use dashmap::DashMap;
use std::time::{Duration, Instant};

/// In-process TTL cache for successful upstream bodies
pub struct ResponseCache {
    entries: DashMap<String, (Instant, String)>,
    ttl: Duration,
}

impl ResponseCache {
    /// A zero TTL disables caching
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let expired = match self.entries.get(key) {
            Some(entry) => {
                let (stored_at, body) = entry.value();
                if stored_at.elapsed() < self.ttl {
                    return Some(body.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove(key);
        }
        None
    }

    pub fn insert(&self, key: String, body: String) {
        if self.is_enabled() {
            self.entries.insert(key, (Instant::now(), body));
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
