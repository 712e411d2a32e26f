//! Statistics and diagnostics types.

#[cfg(feature = "metrics")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-bucket operation statistics.
#[derive(Debug, Clone, Default)]
pub struct BucketOps {
    /// Number of read operations on this bucket.
    pub reads: u64,
    /// Number of write operations on this bucket.
    pub writes: u64,
    /// Number of remove operations on this bucket.
    pub removes: u64,
}

/// Thread-safe statistics tracker for a single bucket.
#[cfg(feature = "metrics")]
pub(crate) struct BucketStats {
    reads: AtomicU64,
    writes: AtomicU64,
    removes: AtomicU64,
}

#[cfg(feature = "metrics")]
impl BucketStats {
    pub fn new() -> Self {
        Self {
            reads: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            removes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_remove(&self) {
        self.removes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> BucketOps {
        BucketOps {
            reads: self.reads.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
        }
    }
}

#[cfg(feature = "metrics")]
impl Default for BucketStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-sized placeholder when metrics are disabled.
#[cfg(not(feature = "metrics"))]
pub(crate) struct BucketStats;

#[cfg(not(feature = "metrics"))]
impl BucketStats {
    pub fn new() -> Self {
        BucketStats
    }

    #[inline]
    pub fn record_read(&self) {}

    #[inline]
    pub fn record_write(&self) {}

    #[inline]
    pub fn record_remove(&self) {}

    pub fn snapshot(&self) -> BucketOps {
        BucketOps::default()
    }
}

#[cfg(not(feature = "metrics"))]
impl Default for BucketStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics for a StripedMap instance.
///
/// Collected one bucket lock at a time, so the totals carry the same weak
/// consistency as `StripedMap::len` when mutations run concurrently.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total number of entries across all buckets.
    pub size: usize,
    /// Number of entries in each bucket.
    pub bucket_sizes: Vec<usize>,
    /// Operation counts for each bucket (zeros when metrics disabled).
    pub operations: Vec<BucketOps>,
}
