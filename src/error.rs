/// Errors that can occur when constructing a StripedMap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bucket count is invalid (must be greater than 0).
    InvalidBucketCount,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBucketCount => write!(f, "bucket count must be greater than 0"),
        }
    }
}

impl std::error::Error for Error {}
