use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from DNS lookups
#[derive(Error, Debug)]
pub enum ReconError {
    /// DNS resolution error
    #[error("DNS error: {0}")]
    Dns(String),

    /// Timeout
    #[error("operation timed out")]
    Timeout,
}
