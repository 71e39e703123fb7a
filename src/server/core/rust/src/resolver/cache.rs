/* src/server/core/rust/src/resolver/cache.rs */

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Time-bounded cache of immutable snapshots. Entries older than `ttl` are misses.
/// Locks are held only for the map operation, never across an await.
pub(crate) struct TtlCache<K, V> {
  ttl: Duration,
  capacity: usize,
  entries: RwLock<HashMap<K, (Instant, V)>>,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
  pub(crate) fn new(ttl: Duration, capacity: usize) -> Self {
    Self { ttl, capacity: capacity.max(1), entries: RwLock::new(HashMap::new()) }
  }

  pub(crate) fn get(&self, key: &K) -> Option<V> {
    let entries = self.entries.read();
    let (stored, value) = entries.get(key)?;
    if stored.elapsed() < self.ttl { Some(value.clone()) } else { None }
  }

  pub(crate) fn insert(&self, key: K, value: V) {
    if self.ttl.is_zero() {
      return;
    }
    let mut entries = self.entries.write();
    if entries.len() >= self.capacity && !entries.contains_key(&key) {
      let ttl = self.ttl;
      entries.retain(|_, (stored, _)| stored.elapsed() < ttl);
      if entries.len() >= self.capacity {
        let oldest = entries.iter().min_by_key(|(_, (stored, _))| *stored).map(|(k, _)| k.clone());
        if let Some(oldest) = oldest {
          entries.remove(&oldest);
        }
      }
    }
    entries.insert(key, (Instant::now(), value));
  }

  pub(crate) fn clear(&self) {
    self.entries.write().clear();
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.read().len()
  }
}
