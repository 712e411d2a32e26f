use std::hash::{Hash, Hasher};

/// Hash a key for bucket assignment.
///
/// Uses `ahash` with its default (fixed) keys, so the same key always hashes
/// to the same value within an instance and across instances. The bucket
/// index is derived from this by the map, never by callers.
#[inline]
pub(crate) fn hash_key<K: Hash>(key: &K) -> u64 {
    let mut hasher = ahash::AHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}
