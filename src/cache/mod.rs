/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! In-memory TTL cache
//!
//! A simple TTL map with no eviction policy beyond expiry: entries outlive
//! their time-to-live only until the next access or an explicit purge. Safe
//! to share across tasks via `Arc`.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// TTL map keyed by `K`, holding values of type `V`
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Creates an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value for `key` if present and not expired
    ///
    /// An expired entry is removed on access and reported as a miss.
    pub async fn get(&self, key: &K) -> Option<V> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // The entry looked expired under the read lock; re-check under the
        // write lock since another task may have replaced it meanwhile.
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Inserts a value with the given time-to-live
    ///
    /// An existing entry under the same key is replaced.
    pub async fn insert(&self, key: K, value: V, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Removes all expired entries
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
    }

    /// Number of entries currently stored, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl<K: Eq + Hash, V: Clone> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
