//! HTTP transport and platform prober for footprint.
//!
//! [`HttpTransport`] issues timeout-bound GET requests; [`PlatformProber`]
//! fans a username out across a [`PlatformSet`](footprint_core::PlatformSet)
//! and collects one explicit outcome per platform.

#![doc(html_root_url = "https://docs.rs/footprint-client/0.1.0")]

mod config;
mod error;
pub mod prober;
pub mod transport;

pub use config::*;
pub use error::{TransportError, TransportResult};
pub use prober::PlatformProber;
pub use transport::{HttpTransport, HttpTransportBuilder, ProbeResponse, Transport};
