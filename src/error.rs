#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Transport failure, timeout, non-2xx status or a body that does not
    /// decode into the expected shape. Not classified any further.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Task error: {0}")]
    Task(String),
}

impl StorefrontError {
    /// Whether the failure came from the catalog fetch, i.e. a retry may help.
    pub fn is_fetch(&self) -> bool {
        matches!(self, StorefrontError::Fetch(_))
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
