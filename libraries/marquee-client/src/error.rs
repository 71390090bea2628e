//! Error types for the catalog client.

use marquee_core::CatalogError;
use thiserror::Error;

/// Errors that can occur when talking to the movie catalog API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-2xx response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Failed to parse a server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid API base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for CatalogError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ParseError(msg) => CatalogError::Decode(msg),
            ClientError::InvalidUrl(msg) => CatalogError::InvalidInput(msg),
            other => CatalogError::Fetch(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_onto_catalog_errors() {
        let mapped: CatalogError = ClientError::ParseError("bad body".to_string()).into();
        assert!(matches!(mapped, CatalogError::Decode(msg) if msg == "bad body"));

        let mapped: CatalogError = ClientError::InvalidUrl("no scheme".to_string()).into();
        assert!(matches!(mapped, CatalogError::InvalidInput(msg) if msg == "no scheme"));

        let mapped: CatalogError = ClientError::ServerError {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(mapped, CatalogError::Fetch(msg) if msg.contains("500")));

        let mapped: CatalogError = ClientError::ServerUnreachable("refused".to_string()).into();
        assert!(matches!(mapped, CatalogError::Fetch(_)));
    }
}
