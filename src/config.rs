use crate::error::Error;

/// Configuration for a StripedMap instance.
#[derive(Debug)]
pub struct Config {
    pub(crate) bucket_count: usize,
    pub(crate) capacity_per_bucket: Option<usize>,
}

impl Config {
    /// Create a new config with defaults (1024 buckets).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of buckets. Must be greater than 0.
    ///
    /// The count is fixed for the map's lifetime; buckets are never added,
    /// removed, or rebalanced.
    pub fn bucket_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidBucketCount);
        }
        self.bucket_count = count;
        Ok(self)
    }

    /// Set initial chain capacity per bucket. Total capacity will be
    /// approximately `capacity_per_bucket * bucket_count`. Omitted by
    /// default (chains start empty and grow on demand).
    pub fn capacity_per_bucket(mut self, capacity: usize) -> Self {
        self.capacity_per_bucket = Some(capacity);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: 1024,
            capacity_per_bucket: None,
        }
    }
}

/// Builder for creating a StripedMap with custom configuration.
#[derive(Debug)]
pub struct StripedMapBuilder {
    config: Config,
}

impl StripedMapBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of buckets. Must be greater than 0.
    pub fn bucket_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.bucket_count(count)?;
        Ok(self)
    }

    /// Set initial chain capacity per bucket.
    pub fn capacity_per_bucket(mut self, capacity: usize) -> Self {
        self.config = self.config.capacity_per_bucket(capacity);
        self
    }

    /// Build a StripedMap with the configured settings.
    pub fn build<K, V>(self) -> Result<crate::StripedMap<K, V>, Error>
    where
        K: std::hash::Hash + Eq + Send + Sync,
        V: Send + Sync,
    {
        crate::StripedMap::with_config(self.config)
    }
}

impl Default for StripedMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
