//! Explicit site registration
//!
//! Instead of inspecting parameter metadata at runtime, consumers declare
//! their `(site id, scalar type, configuration key)` triples up front.
//!
//! # Example
//!
//! ```rust
//! use confinject::domain::ScalarType;
//! use confinject::site::SiteRegistry;
//!
//! let registry = SiteRegistry::builder()
//!     .register("Repository::limit", ScalarType::Integer, "repository.limit")
//!     .register("Broker::host", ScalarType::Text, "broker.host")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! ```

use super::injection::InjectionSite;
use crate::domain::{ConfigError, ConfigKey, Result, ScalarType, SiteId};
use std::collections::BTreeMap;

/// Lookup table from [`SiteId`] to a resolvable [`InjectionSite`]
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: BTreeMap<SiteId, InjectionSite>,
}

impl SiteRegistry {
    pub fn builder() -> SiteRegistryBuilder {
        SiteRegistryBuilder::default()
    }

    pub fn get(&self, id: &SiteId) -> Option<&InjectionSite> {
        self.sites.get(id)
    }

    /// Registered sites ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (&SiteId, &InjectionSite)> {
        self.sites.iter()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Builder collecting registrations; validation happens in [`build`](Self::build)
#[derive(Debug, Default)]
pub struct SiteRegistryBuilder {
    entries: Vec<(String, ScalarType, String)>,
}

impl SiteRegistryBuilder {
    pub fn register(
        mut self,
        id: impl Into<String>,
        required_type: ScalarType,
        key: impl Into<String>,
    ) -> Self {
        self.entries.push((id.into(), required_type, key.into()));
        self
    }

    /// Validates ids and keys and builds the registry
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Manifest`] for an invalid id or key, or an id
    /// registered twice.
    pub fn build(self) -> Result<SiteRegistry> {
        let mut sites = BTreeMap::new();

        for (id, required_type, key) in self.entries {
            let site_id = SiteId::new(id).map_err(ConfigError::Manifest)?;
            let key = ConfigKey::new(key)
                .map_err(|e| ConfigError::Manifest(format!("site '{site_id}': {e}")))?;

            if sites.contains_key(&site_id) {
                return Err(ConfigError::Manifest(format!(
                    "site '{site_id}' is registered more than once"
                )));
            }

            let site = InjectionSite::field(site_id.as_str(), required_type, key);
            sites.insert(site_id, site);
        }

        Ok(SiteRegistry { sites })
    }
}
