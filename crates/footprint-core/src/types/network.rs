use serde::{Deserialize, Serialize};

/// Coarse classification of the network an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkClass {
    /// Private, loopback or link-local ranges
    Private,
    /// Publicly routable address
    Public,
    /// Not an address
    Unknown,
}

impl NetworkClass {
    /// User-facing description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Private => "Private IP (Local Network)",
            Self::Public => "Public IP (ISP / Hosting Provider)",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
