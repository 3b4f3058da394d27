use thiserror::Error;

/// Result type alias for footprint operations
pub type Result<T> = std::result::Result<T, ExposureError>;

/// Errors that can occur while checking public exposure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExposureError {
    /// Input was blank after trimming
    #[error("input is empty")]
    EmptyInput,

    /// Input is neither an IP address nor an acceptable username
    #[error("input is neither a valid IP address nor a supported username")]
    UnsupportedInput,

    /// Platform URL template does not carry exactly one `{username}` placeholder
    #[error("invalid URL template for {platform}: {template}")]
    InvalidTemplate {
        /// Platform the template belongs to
        platform: String,
        /// The offending template
        template: String,
    },
}
