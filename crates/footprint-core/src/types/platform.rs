use crate::error::{ExposureError, Result};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the candidate username
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// A public service whose profile pages can be probed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Display name
    pub name: String,

    /// Profile URL with a single `{username}` placeholder
    pub url_template: String,
}

impl Platform {
    /// Create a platform, checking the template has exactly one placeholder
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let url_template = url_template.into();

        if url_template.matches(USERNAME_PLACEHOLDER).count() != 1 {
            return Err(ExposureError::InvalidTemplate {
                platform: name,
                template: url_template,
            });
        }

        Ok(Self { name, url_template })
    }

    /// Profile URL for a username
    #[must_use]
    pub fn profile_url(&self, username: &str) -> String {
        self.url_template.replace(USERNAME_PLACEHOLDER, username)
    }
}

/// Ordered set of platforms to probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSet(Vec<Platform>);

impl PlatformSet {
    /// Build a set from explicit platforms (mainly for pointing probes at test servers)
    #[must_use]
    pub const fn new(platforms: Vec<Platform>) -> Self {
        Self(platforms)
    }

    /// Number of platforms
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is nothing to probe
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate platforms in probe order
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.0.iter()
    }
}

impl Default for PlatformSet {
    fn default() -> Self {
        let builtin = [
            ("GitHub", "https://github.com/{username}"),
            ("Twitter/X", "https://x.com/{username}"),
            ("Instagram", "https://www.instagram.com/{username}"),
            ("Reddit", "https://www.reddit.com/user/{username}"),
            ("Medium", "https://medium.com/@{username}"),
            ("Dev.to", "https://dev.to/{username}"),
        ];

        Self(
            builtin
                .into_iter()
                .map(|(name, url_template)| Platform {
                    name: name.to_string(),
                    url_template: url_template.to_string(),
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a PlatformSet {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_the_six_builtin_platforms_in_order() {
        let set = PlatformSet::default();
        let names: Vec<&str> = set.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["GitHub", "Twitter/X", "Instagram", "Reddit", "Medium", "Dev.to"]
        );
    }

    #[test]
    fn builtin_templates_are_valid() {
        for p in &PlatformSet::default() {
            assert!(Platform::new(&p.name, &p.url_template).is_ok(), "{}", p.name);
        }
    }

    #[test]
    fn profile_url_substitutes_username() {
        let medium = Platform::new("Medium", "https://medium.com/@{username}").unwrap();
        assert_eq!(medium.profile_url("alice"), "https://medium.com/@alice");
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = Platform::new("Broken", "https://example.com/profile").unwrap_err();
        assert!(matches!(err, ExposureError::InvalidTemplate { .. }));

        let err = Platform::new("Twice", "https://{username}.example.com/{username}").unwrap_err();
        assert!(matches!(err, ExposureError::InvalidTemplate { .. }));
    }
}
