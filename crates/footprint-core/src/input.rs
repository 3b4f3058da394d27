//! Input classification.
//!
//! Raw input is trimmed and then tried as an IP address first, a username
//! second. A numeric string that parses as an address is never a username.

use crate::error::{ExposureError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pattern accepted for usernames
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9._]{3,30}$";

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(USERNAME_PATTERN).expect("username pattern is valid"))
}

/// What kind of input was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// IPv4 or IPv6 address
    Ip,
    /// Candidate username
    Username,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ip => write!(f, "IP Address"),
            Self::Username => write!(f, "Username"),
        }
    }
}

/// A classified, normalized input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Kind of input
    pub kind: InputKind,

    /// Canonical address for [`InputKind::Ip`], trimmed text for [`InputKind::Username`]
    pub value: String,
}

impl FromStr for ValidationResult {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self> {
        classify(s)
    }
}

/// Classify raw input as an IP address or a username.
///
/// IPv4-mapped IPv6 addresses are reported in their dotted IPv4 form.
pub fn classify(raw: &str) -> Result<ValidationResult> {
    let clean = raw.trim();

    if clean.is_empty() {
        return Err(ExposureError::EmptyInput);
    }

    if let Ok(ip) = clean.parse::<IpAddr>() {
        return Ok(ValidationResult {
            kind: InputKind::Ip,
            value: ip.to_canonical().to_string(),
        });
    }

    if username_regex().is_match(clean) {
        return Ok(ValidationResult {
            kind: InputKind::Username,
            value: clean.to_string(),
        });
    }

    Err(ExposureError::UnsupportedInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_is_classified_as_ip() {
        let result = classify("192.168.1.10").unwrap();
        assert_eq!(result.kind, InputKind::Ip);
        assert_eq!(result.value, "192.168.1.10");
    }

    #[test]
    fn ipv6_is_canonicalized() {
        let result = classify("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(result.kind, InputKind::Ip);
        assert_eq!(result.value, "2001:db8::1");
    }

    #[test]
    fn mapped_ipv6_collapses_to_ipv4() {
        let result = classify("::ffff:10.0.0.1").unwrap();
        assert_eq!(result.kind, InputKind::Ip);
        assert_eq!(result.value, "10.0.0.1");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let result = classify("  validuser_123\t\n").unwrap();
        assert_eq!(result.kind, InputKind::Username);
        assert_eq!(result.value, "validuser_123");

        let result = classify(" 127.0.0.1 ").unwrap();
        assert_eq!(result.value, "127.0.0.1");
    }

    #[test]
    fn empty_and_blank_input_is_rejected() {
        assert_eq!(classify(""), Err(ExposureError::EmptyInput));
        assert_eq!(classify("   "), Err(ExposureError::EmptyInput));
        assert_eq!(classify("\t\n"), Err(ExposureError::EmptyInput));
    }

    #[test]
    fn username_length_bounds() {
        assert_eq!(classify("ab"), Err(ExposureError::UnsupportedInput));
        assert_eq!(classify("a"), Err(ExposureError::UnsupportedInput));
        assert_eq!(classify("abc").unwrap().kind, InputKind::Username);

        let max = "a".repeat(30);
        assert_eq!(classify(&max).unwrap().value, max);

        let too_long = "a".repeat(31);
        assert_eq!(classify(&too_long), Err(ExposureError::UnsupportedInput));
    }

    #[test]
    fn username_charset() {
        assert_eq!(classify("john.doe_99").unwrap().kind, InputKind::Username);
        assert_eq!(classify("!!!"), Err(ExposureError::UnsupportedInput));
        assert_eq!(classify("john-doe"), Err(ExposureError::UnsupportedInput));
        assert_eq!(classify("john doe"), Err(ExposureError::UnsupportedInput));
        assert_eq!(classify("jöhn"), Err(ExposureError::UnsupportedInput));
    }

    #[test]
    fn ip_parsing_wins_over_username_pattern() {
        // "10.0.0.1" also fits the username charset
        let result = classify("10.0.0.1").unwrap();
        assert_eq!(result.kind, InputKind::Ip);
    }

    #[test]
    fn dotted_number_that_is_not_an_ip_is_a_username() {
        let result = classify("1.2.3").unwrap();
        assert_eq!(result.kind, InputKind::Username);
    }

    #[test]
    fn from_str_delegates_to_classify() {
        let parsed: ValidationResult = "::1".parse().unwrap();
        assert_eq!(parsed.kind, InputKind::Ip);
        assert_eq!(parsed.value, "::1");
        assert!("".parse::<ValidationResult>().is_err());
    }
}
