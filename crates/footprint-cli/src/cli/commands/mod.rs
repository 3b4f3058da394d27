//! Command implementations.

pub mod ip;
pub mod username;

use footprint::ProbeConfig;

/// Shared context for all commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Whether to show educational explanations
    pub explain: bool,

    /// Whether to show per-platform probe outcomes
    pub details: bool,

    /// Probe timing and concurrency limits
    pub probe: ProbeConfig,
}
