//! # footprint-cli
//!
//! Command-line interface that shows how exposed an IP address or a username is.
//!
//! ## Features
//!
//! - **IP checks**: network classification and reverse DNS
//! - **Username checks**: concurrent profile probes across public platforms
//! - **Educational mode**: `--explain` describes each check before running it
//! - **Probe details**: `--details` shows the outcome for every platform

pub mod cli;
pub mod education;
pub mod logging;
pub mod output;

pub use cli::run;
