use crate::bucket::Bucket;
use crate::config::Config;
use crate::error::Error;
use crate::hash::hash_key;
use crate::stats::{BucketOps, Stats};
use std::hash::Hash;

/// Concurrent map with one reader-writer lock per bucket.
///
/// Keys are assigned to a fixed array of buckets by `hash(key) % N`, and each
/// bucket is guarded by its own lock. Operations on different buckets never
/// block each other; operations on the same bucket serialize through that
/// bucket's lock (any number of readers, or one writer).
///
/// The bucket count is fixed at construction. There is no resizing or
/// rehashing: a key's bucket never changes, and under a skewed key
/// distribution a single chain can grow without bound, degrading lookups in
/// that bucket to a linear scan of its entries.
///
/// `StripedMap` implements neither `Clone` nor `Copy`: the buckets own live
/// lock state, and duplicating that has no sound meaning. Moving the map is
/// fine, since moving requires ownership and no lock guard can outlive a
/// borrow of the map.
///
/// # Example
///
/// ```rust
/// use stripedmap::StripedMap;
///
/// let map = StripedMap::new();
/// map.insert("key1", "value1");
///
/// if let Some(value) = map.get(&"key1") {
///     println!("Found: {}", value);
/// }
/// ```
pub struct StripedMap<K, V> {
    buckets: Vec<Bucket<K, V>>,
}

impl<K, V> StripedMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    /// Create a new map with defaults (1024 buckets).
    pub fn new() -> Self {
        Self::with_config(Config::default()).unwrap()
    }

    /// Create a new map with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if config.bucket_count == 0 {
            return Err(Error::InvalidBucketCount);
        }

        let mut buckets = Vec::with_capacity(config.bucket_count);
        for _ in 0..config.bucket_count {
            buckets.push(match config.capacity_per_bucket {
                Some(capacity) => Bucket::with_capacity(capacity),
                None => Bucket::new(),
            });
        }

        Ok(Self { buckets })
    }

    /// Number of buckets this map was constructed with.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Figure out which bucket this key belongs to.
    #[inline]
    fn bucket_index(&self, key: &K) -> usize {
        (hash_key(key) as usize) % self.buckets.len()
    }

    /// Insert a key-value pair, overwriting the value if the key exists.
    ///
    /// Acquires only the target bucket's lock exclusively; inserts into
    /// different buckets run fully in parallel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripedmap::StripedMap;
    ///
    /// let map = StripedMap::new();
    /// map.insert("key", "value");
    /// map.insert("key", "new_value");
    /// assert_eq!(map.get(&"key"), Some("new_value"));
    /// ```
    pub fn insert(&self, key: K, value: V) {
        let bucket_idx = self.bucket_index(&key);
        self.buckets[bucket_idx].upsert(key, value);
    }

    /// Get a copy of the value for a key.
    ///
    /// Acquires the target bucket's lock in shared mode, so any number of
    /// concurrent readers can scan the same bucket, and reads never block
    /// operations on other buckets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripedmap::StripedMap;
    ///
    /// let map = StripedMap::new();
    /// map.insert("key", "value");
    /// assert_eq!(map.get(&"key"), Some("value"));
    /// assert_eq!(map.get(&"missing"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let bucket_idx = self.bucket_index(key);
        self.buckets[bucket_idx].get(key)
    }

    /// Remove a key, returning whether an entry was present and removed.
    ///
    /// Exclusive lock on the target bucket only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripedmap::StripedMap;
    ///
    /// let map = StripedMap::new();
    /// map.insert("key", "value");
    /// assert!(map.remove(&"key"));
    /// assert!(!map.remove(&"key"));
    /// ```
    pub fn remove(&self, key: &K) -> bool {
        let bucket_idx = self.bucket_index(key);
        self.buckets[bucket_idx].remove(key)
    }

    /// Check whether a key is present.
    ///
    /// This is an independent lookup under its own shared-lock acquisition.
    /// It is **not** atomic with any subsequent `get`/`insert`/`remove` on
    /// the same key: a concurrent mutation can land between the two calls.
    /// Callers that need atomic check-and-mutate need a compound primitive,
    /// which this map intentionally does not provide.
    pub fn contains_key(&self, key: &K) -> bool {
        let bucket_idx = self.bucket_index(key);
        self.buckets[bucket_idx].contains(key)
    }

    /// Total number of entries across all buckets.
    ///
    /// Sums bucket lengths one shared lock at a time, never holding more
    /// than one bucket lock at once. If mutations run concurrently the
    /// result is **not** a point-in-time snapshot: buckets counted early may
    /// reflect an older state than buckets counted late.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    /// Check if the map is empty. Same weak consistency as [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    /// Remove every entry from the map.
    ///
    /// Drains buckets one exclusive lock at a time, never holding more than
    /// one bucket lock at once. If an insert races with an in-progress
    /// `clear`, a bucket already drained can repopulate before the later
    /// buckets are reached, so the map may never have been globally empty at
    /// any single instant. That is the accepted cost of not serializing the
    /// whole structure behind one lock.
    pub fn clear(&self) {
        for bucket in &self.buckets {
            bucket.clear();
        }
    }

    /// Number of entries in each bucket, in bucket order.
    ///
    /// Same weak consistency as [`len`](Self::len).
    pub fn bucket_loads(&self) -> Vec<usize> {
        self.buckets.iter().map(|bucket| bucket.len()).collect()
    }

    /// Get detailed statistics about the map and its buckets.
    pub fn stats(&self) -> Stats {
        let bucket_sizes: Vec<usize> = self.buckets.iter().map(|b| b.len()).collect();
        let operations: Vec<BucketOps> = self.buckets.iter().map(|b| b.stats()).collect();
        let size: usize = bucket_sizes.iter().sum();

        Stats {
            size,
            bucket_sizes,
            operations,
        }
    }
}

impl<K, V> Default for StripedMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
