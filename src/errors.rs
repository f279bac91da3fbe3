use thiserror::Error;

/// Error type that captures persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Error type for the offline asset cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Fetch failed for `{path}`: {reason}")]
    Fetch { path: String, reason: String },
    #[error("Asset `{0}` unavailable: not cached and no fallback present")]
    Unavailable(String),
}
