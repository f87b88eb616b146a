use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure while analyzing a declared package; aborts the whole run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to persist cache entry: {0}")]
    Cache(#[from] CacheError),
}
