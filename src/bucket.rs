use crate::stats::BucketStats;
use parking_lot::RwLock;
use std::hash::Hash;

/// One key-value pair in a bucket's chain.
///
/// The key is fixed for the entry's lifetime; the value is overwritten in
/// place when the same key is inserted again.
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A single bucket: an unordered chain of entries behind a read-write lock.
///
/// The chain is scanned linearly. Entry order carries no meaning, so removal
/// swaps the last entry into the hole instead of shifting.
pub(crate) struct Bucket<K, V> {
    chain: RwLock<Vec<Entry<K, V>>>,
    stats: BucketStats,
}

impl<K, V> Bucket<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Vec::new()),
            stats: BucketStats::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: RwLock::new(Vec::with_capacity(capacity)),
            stats: BucketStats::new(),
        }
    }

    /// Scan for a key under a shared lock, cloning the value out.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let chain = self.chain.read();
        let result = chain
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.value.clone());
        if result.is_some() {
            self.stats.record_read();
        }
        result
    }

    /// Check for a key under a shared lock without cloning.
    pub fn contains(&self, key: &K) -> bool {
        self.chain.read().iter().any(|entry| entry.key == *key)
    }

    /// Insert or overwrite under an exclusive lock.
    ///
    /// If the key already has an entry, its value is replaced in place;
    /// otherwise a new entry is appended to the chain.
    pub fn upsert(&self, key: K, value: V) {
        let mut chain = self.chain.write();
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
        } else {
            chain.push(Entry { key, value });
        }
        self.stats.record_write();
    }

    /// Remove the entry for a key under an exclusive lock.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&self, key: &K) -> bool {
        let mut chain = self.chain.write();
        if let Some(pos) = chain.iter().position(|entry| entry.key == *key) {
            chain.swap_remove(pos);
            self.stats.record_remove();
            true
        } else {
            false
        }
    }

    /// Current chain length, under a shared lock.
    pub fn len(&self) -> usize {
        self.chain.read().len()
    }

    /// Check if this bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.read().is_empty()
    }

    /// Empty the chain under an exclusive lock.
    pub fn clear(&self) {
        self.chain.write().clear();
    }

    /// Get a snapshot of statistics for this bucket.
    pub fn stats(&self) -> crate::stats::BucketOps {
        self.stats.snapshot()
    }
}

impl<K, V> Default for Bucket<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
