use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors from the HTTP transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The probe URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Request exceeded its timeout
    #[error("request timed out")]
    Timeout,

    /// Could not connect (DNS failure, refused, TLS)
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other request failure
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::Build(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
