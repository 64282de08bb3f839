use pdx_store::StoreError;

/// Why the upstream record for an identifier could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The upstream answered 404 for this identifier.
    #[error("pokemon {0} not found upstream")]
    NotFound(i32),
    /// The upstream answered with another non-success status.
    #[error("upstream answered {1} for pokemon {0}")]
    Status(i32, u16),
    /// The request could not be sent, or its body could not be read.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Why a single identifier of a pipeline run was not loaded.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("invalid record: {0}")]
    Validation(String),
    #[error("storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl Failure {
    /// Log level for a failed identifier. Gaps in the upstream ID space and
    /// records it serves malformed are expected; anything else is not.
    pub fn level(&self) -> log::Level {
        match self {
            Self::Fetch(FetchError::NotFound(_)) => log::Level::Warn,
            Self::Validation(_) => log::Level::Warn,
            Self::Fetch(_) => log::Level::Error,
            Self::Storage(_) => log::Level::Error,
        }
    }
}
