//! Public exposure checks for IP addresses and usernames.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use footprint::{classify, HttpTransport, InputKind, PlatformProber, UsernameExposure};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = classify("validuser_123")?;
//!     assert_eq!(input.kind, InputKind::Username);
//!
//!     let prober = PlatformProber::new(HttpTransport::new()?);
//!     let found = prober.probe_all(&input.value).await;
//!
//!     let exposure = UsernameExposure::assess(found);
//!     println!("Exposure level: {}", exposure.level);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/footprint/0.1.0")]

// Re-export core types
pub use footprint_core::*;

// Re-export transport and prober
pub use footprint_client::{
    HttpTransport, HttpTransportBuilder, PlatformProber, ProbeConfig, ProbeResponse, Transport,
    TransportError, DEFAULT_BATCH_DEADLINE, DEFAULT_MAX_CONCURRENT, DEFAULT_REQUEST_TIMEOUT,
};

// Re-export DNS and network classification
pub use footprint_recon as recon;

// Re-export runtime for convenience
pub use tokio;
