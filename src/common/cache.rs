use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

/// Time source for cache expiry. Injected so tests can drive expiry
/// without real delays.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock backed by the system monotonic clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Size-bounded cache whose entries expire after a fixed time-to-live.
///
/// Expired entries are treated as absent and dropped on the next access;
/// the LRU bound evicts the coldest entry once capacity is reached.
pub struct TtlCache<V> {
    entries: Mutex<LruCache<String, Entry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            clock,
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if self.clock.now() < entry.expires_at => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.pop(key);
        }
        None
    }

    pub fn put(&self, key: String, value: V) {
        let expires_at = self.clock.now() + self.ttl;
        self.entries.lock().put(key, Entry { value, expires_at });
    }

    /// Drop an entry before its TTL runs out.
    pub fn expire(&self, key: &str) {
        self.entries.lock().pop(key);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
