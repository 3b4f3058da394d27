//! Core types for the footprint exposure checker.
//!
//! This crate provides the pieces shared by every other footprint crate:
//!
//! - **Input**: classification of raw input into an IP address or a username
//! - **Types**: platforms, probe outcomes, network classes and exposure assessments
//! - **Errors**: the top-level [`ExposureError`]
//!
//! # Example
//!
//! ```rust
//! use footprint_core::{classify, InputKind};
//!
//! let input = classify(" 8.8.8.8 ").unwrap();
//! assert_eq!(input.kind, InputKind::Ip);
//! assert_eq!(input.value, "8.8.8.8");
//! ```

#![doc(html_root_url = "https://docs.rs/footprint-core/0.1.0")]

mod error;
pub mod input;
pub mod types;

pub use error::{ExposureError, Result};
pub use input::{classify, InputKind, ValidationResult};
pub use types::*;
