//! Probe configuration types.

use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default deadline shared by a whole probe batch
pub const DEFAULT_BATCH_DEADLINE: Duration = Duration::from_secs(10);

/// Default number of probes in flight at once
pub const DEFAULT_MAX_CONCURRENT: usize = 6;

/// Timing and concurrency limits for a probe batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Timeout applied to each request by the transport
    pub request_timeout: Duration,

    /// Deadline for the entire batch, measured from its start
    pub batch_deadline: Duration,

    /// Maximum probes in flight, clamped to the platform count when probing
    pub max_concurrent: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfig {
    /// Create a configuration with the default limits
    #[must_use]
    pub const fn new() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            batch_deadline: DEFAULT_BATCH_DEADLINE,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the batch deadline
    #[must_use]
    pub const fn batch_deadline(mut self, deadline: Duration) -> Self {
        self.batch_deadline = deadline;
        self
    }

    /// Set the concurrency bound (at least one)
    #[must_use]
    pub const fn max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = if max == 0 { 1 } else { max };
        self
    }
}
