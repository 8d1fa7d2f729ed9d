//! Domain identifier types with validation
//!
//! Newtype wrappers for configuration keys and registered injection sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration key newtype wrapper
///
/// A dotted textual identifier naming one configuration value, e.g.
/// `service.port`.
///
/// # Examples
///
/// ```
/// use confinject::domain::ids::ConfigKey;
///
/// let key = ConfigKey::new("service.port").unwrap();
/// assert_eq!(key.env_var_name(), "SERVICE_PORT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new ConfigKey from a string
    ///
    /// # Returns
    ///
    /// Returns `Err` if the key is empty or has surrounding whitespace
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Configuration key cannot be empty".to_string());
        }
        if key.trim() != key {
            return Err(format!(
                "Configuration key '{key}' must not have surrounding whitespace"
            ));
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Name of the environment variable that overrides this key
    ///
    /// The key is upper-cased and every `.` replaced with `_`.
    pub fn env_var_name(&self) -> String {
        self.0.to_uppercase().replace('.', "_")
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stable identifier of a registered injection site
///
/// Consumers name their sites (e.g. `LandscapeRepository::max_records`) and
/// register them once in a [`SiteRegistry`](crate::site::SiteRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

impl SiteId {
    /// Creates a new SiteId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Site ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the site ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SiteId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SiteId> for String {
    fn from(id: SiteId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_creation() {
        let key = ConfigKey::new("foo.bar").unwrap();
        assert_eq!(key.as_str(), "foo.bar");
        assert_eq!(key.to_string(), "foo.bar");
    }

    #[test]
    fn test_config_key_empty_fails() {
        assert!(ConfigKey::new("").is_err());
        assert!(ConfigKey::new("   ").is_err());
    }

    #[test]
    fn test_config_key_surrounding_whitespace_fails() {
        assert!(ConfigKey::new(" foo.bar").is_err());
        assert!(ConfigKey::new("foo.bar\t").is_err());
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(ConfigKey::new("a.b.c").unwrap().env_var_name(), "A_B_C");
        assert_eq!(ConfigKey::new("foo.bar").unwrap().env_var_name(), "FOO_BAR");
        assert_eq!(
            ConfigKey::new("service.mongo-db.host").unwrap().env_var_name(),
            "SERVICE_MONGO-DB_HOST"
        );
        assert_eq!(ConfigKey::new("PLAIN").unwrap().env_var_name(), "PLAIN");
    }

    #[test]
    fn test_config_key_deserialize_validates() {
        let ok: Result<ConfigKey, _> = serde_json::from_str("\"x.y\"");
        assert!(ok.is_ok());
        let bad: Result<ConfigKey, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_site_id_empty_fails() {
        assert!(SiteId::new("").is_err());
        assert_eq!(SiteId::new("Repo::limit").unwrap().as_str(), "Repo::limit");
    }
}
