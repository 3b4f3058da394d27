//! Exposure assessment for username and IP lookups.
//!
//! Assessments are pure: they turn raw findings into a level and a list of
//! warnings. Rendering lives with the CLI.

use super::NetworkClass;
use serde::{Deserialize, Serialize};

/// Platforms needed for a username to rate [`ExposureLevel::High`]
pub const HIGH_EXPOSURE_PLATFORMS: usize = 5;

/// Platforms needed for a username to rate [`ExposureLevel::Moderate`]
pub const MODERATE_EXPOSURE_PLATFORMS: usize = 2;

/// Platforms at which impersonation becomes a concern
pub const IMPERSONATION_PLATFORMS: usize = 4;

/// How much is publicly discoverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExposureLevel {
    /// Little is discoverable
    Low,
    /// Some linkable information
    Moderate,
    /// Widely discoverable
    High,
}

impl std::fmt::Display for ExposureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A risk worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureWarning {
    /// Same username on several platforms links the profiles together
    ProfileLinking,
    /// Heavy reuse makes impersonation easy
    ImpersonationRisk,
    /// Reverse DNS names leak infrastructure naming
    InfrastructurePattern,
    /// Public addresses reveal provider and region
    IspRegion,
}

impl ExposureWarning {
    /// Lines shown to the user for this warning
    #[must_use]
    pub const fn lines(self) -> &'static [&'static str] {
        match self {
            Self::ProfileLinking => &[
                "Reusing the same username allows strangers to link profiles.",
                "This can reveal habits, interests, or identity patterns.",
            ],
            Self::ImpersonationRisk => &["High reuse increases impersonation and scam risk."],
            Self::InfrastructurePattern => &["Reverse DNS can reveal infrastructure patterns."],
            Self::IspRegion => &[
                "Public IPs reveal ISP and approximate region.",
                "Often used in geo-targeted scams and tracking.",
            ],
        }
    }
}

/// Assessment of a username's footprint across platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameExposure {
    /// Platforms where the username exists, in probe order
    pub found: Vec<String>,

    /// Overall level
    pub level: ExposureLevel,

    /// Additive warnings, lowest threshold first
    pub warnings: Vec<ExposureWarning>,
}

impl UsernameExposure {
    /// Assess the platforms a username was found on
    #[must_use]
    pub fn assess(found: Vec<String>) -> Self {
        let count = found.len();

        let level = if count >= HIGH_EXPOSURE_PLATFORMS {
            ExposureLevel::High
        } else if count >= MODERATE_EXPOSURE_PLATFORMS {
            ExposureLevel::Moderate
        } else {
            ExposureLevel::Low
        };

        let mut warnings = Vec::new();
        if count >= MODERATE_EXPOSURE_PLATFORMS {
            warnings.push(ExposureWarning::ProfileLinking);
        }
        if count >= IMPERSONATION_PLATFORMS {
            warnings.push(ExposureWarning::ImpersonationRisk);
        }

        Self {
            found,
            level,
            warnings,
        }
    }

    /// Number of platforms the username was found on
    #[must_use]
    pub fn count(&self) -> usize {
        self.found.len()
    }
}

/// Assessment of what an IP address reveals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpExposure {
    /// Address that was checked
    pub ip: String,

    /// Network classification
    pub network: NetworkClass,

    /// Reverse DNS hostnames, in resolver order
    pub records: Vec<String>,

    /// Overall level
    pub level: ExposureLevel,

    /// Warnings in display order
    pub warnings: Vec<ExposureWarning>,
}

impl IpExposure {
    /// Assess an address from its network class and reverse DNS records
    #[must_use]
    pub fn assess(ip: impl Into<String>, network: NetworkClass, records: Vec<String>) -> Self {
        let mut warnings = Vec::new();

        let level = if records.is_empty() {
            ExposureLevel::Low
        } else {
            warnings.push(ExposureWarning::InfrastructurePattern);
            ExposureLevel::Moderate
        };

        if network == NetworkClass::Public {
            warnings.push(ExposureWarning::IspRegion);
        }

        Self {
            ip: ip.into(),
            network,
            records,
            level,
            warnings,
        }
    }
}
