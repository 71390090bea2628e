/// Core error types for Marquee
use thiserror::Error;

use crate::types::{GenreId, MovieId};

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for Marquee
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A fetch against the upstream API failed (transport or non-2xx)
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Movie not found
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    /// Genre not found
    #[error("Genre not found: {0}")]
    GenreNotFound(GenreId),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}
