use serde::{Deserialize, Serialize};

/// Outcome of probing one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Profile page answered 200
    Found,
    /// Profile page answered with another status
    NotFound {
        /// HTTP status code returned
        status: u16,
    },
    /// The request did not complete
    Failed {
        /// Transport error description
        reason: String,
    },
    /// The shared batch deadline expired first
    DeadlineExceeded,
}

impl ProbeStatus {
    /// Returns true if the username exists on the platform
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }

    /// Returns true if the platform gave no usable answer
    #[must_use]
    pub const fn is_inconclusive(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::DeadlineExceeded)
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found => write!(f, "found"),
            Self::NotFound { status } => write!(f, "not found (HTTP {status})"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            Self::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

/// Probe result for a single platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProbe {
    /// Platform name
    pub platform: String,

    /// URL that was requested
    pub url: String,

    /// What happened
    pub status: ProbeStatus,
}

/// Results of probing every platform, in platform order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// The username that was probed
    pub username: String,

    /// One entry per platform
    pub probes: Vec<PlatformProbe>,
}

impl ProbeReport {
    /// Names of platforms where the username was found, in probe order
    #[must_use]
    pub fn found(&self) -> Vec<String> {
        self.probes
            .iter()
            .filter(|p| p.status.is_found())
            .map(|p| p.platform.clone())
            .collect()
    }

    /// Number of platforms that failed or timed out
    #[must_use]
    pub fn inconclusive_count(&self) -> usize {
        self.probes.iter().filter(|p| p.status.is_inconclusive()).count()
    }
}
