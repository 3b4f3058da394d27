//! Reverse DNS and network classification for footprint.
//!
//! - [`classify_network`] decides whether an address is private or public
//! - [`DnsResolver`] performs PTR lookups through the system resolver
//! - [`reverse_lookup`] wraps any [`ReverseResolver`] and never fails

#![doc(html_root_url = "https://docs.rs/footprint-recon/0.1.0")]

pub mod dns;
mod error;
pub mod network;

pub use dns::{reverse_lookup, DnsResolver, ReverseResolver, DEFAULT_LOOKUP_TIMEOUT};
pub use error::{ReconError, ReconResult};
pub use network::{classify_addr, classify_network};
