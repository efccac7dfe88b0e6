use thiserror::Error;

pub type RecommenderResult<T> = Result<T, RecommenderError>;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("Scheme catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("State not recognised: {0}")]
    StateNotResolved(String),

    #[error("Embedding failed: {0}")]
    EmbeddingFailure(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for RecommenderError {
    fn from(error: config::ConfigError) -> Self {
        RecommenderError::Config(error.to_string())
    }
}
