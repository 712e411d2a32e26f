//! # StripedMap
//!
//! A concurrent map built on lock striping: a fixed array of buckets, each
//! with its own reader-writer lock.
//!
//! Every key hashes to exactly one bucket, and every operation touches only
//! that bucket's lock — shared for reads, exclusive for writes. Operations
//! on different buckets never contend, which is the whole point: instead of
//! one global lock serializing every access, contention is limited to keys
//! that happen to share a bucket.
//!
//! ## Features
//!
//! - **Lock striping**: per-bucket locks instead of one global mutex
//! - **Thread-safe**: all operations take `&self` and are safe to share
//! - **Deterministic**: same key always maps to the same bucket
//! - **Configurable**: choose the bucket count at construction (default 1024)
//! - **Statistics**: per-bucket load and operation tracking
//!
//! ## Example
//!
//! ```rust
//! use stripedmap::StripedMap;
//!
//! let map = StripedMap::new();
//!
//! // Insert values (upsert semantics)
//! map.insert("key1", "value1");
//! map.insert("key2", "value2");
//!
//! // Read values (returns a copy)
//! if let Some(value) = map.get(&"key1") {
//!     println!("Found: {}", value);
//! }
//!
//! // Remove reports whether the key was present
//! assert!(map.remove(&"key1"));
//!
//! // Whole-structure queries
//! assert_eq!(map.len(), 1);
//! map.clear();
//! assert!(map.is_empty());
//! ```
//!
//! ## Consistency contract
//!
//! Within one bucket, operations are linearizable: the lock totally orders
//! writers, and every reader sees a state consistent with some point in that
//! order. Across buckets there is no global ordering. [`StripedMap::len`]
//! and [`StripedMap::clear`] visit buckets one lock at a time, so their
//! results are not point-in-time snapshots when mutations race with them —
//! an intentional tradeoff, documented on each method, in exchange for never
//! serializing the whole structure behind one lock.
//!
//! [`StripedMap::contains_key`] is likewise an independent lookup, not
//! atomic with any subsequent operation on the same key.
//!
//! ## Configuration
//!
//! ```rust
//! use stripedmap::StripedMapBuilder;
//!
//! let map = StripedMapBuilder::new()
//!     .bucket_count(256)?
//!     .build::<String, i32>()?;
//! # Ok::<(), stripedmap::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Internal bucket implementation.
mod bucket;
/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Bucket-index hashing.
mod hash;
/// Statistics and metrics collection.
pub mod stats;
/// Main StripedMap implementation.
pub mod stripedmap;

// Re-export main types
pub use config::{Config, StripedMapBuilder};
pub use error::Error;
pub use stats::{BucketOps, Stats};
pub use stripedmap::StripedMap;
