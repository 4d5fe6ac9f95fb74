//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Revolut Business client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Revolut API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response body could not be decoded.
    #[error("Error decoding response: {0}")]
    DecodeError(#[from] serde_json::Error),
    /// The RSA private key could not be loaded, or the client assertion could not be signed.
    #[error("Error signing client assertion: {0}")]
    SigningError(#[from] jsonwebtoken::errors::Error),
    /// The client was built with invalid settings. Nothing has been sent to the server.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Revolut HTTP APIs error.
///
/// The Business API error payloads are not parsed: the raw body is kept as-is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Raw response body, decoded lossily as UTF-8.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
