//! TOML site manifest
//!
//! A manifest lists the injection sites a service declares, so they can be
//! resolved and checked outside the running service:
//!
//! ```toml
//! [[site]]
//! id = "LandscapeRepository::max_records"
//! type = "int"
//! key = "repository.history.intervalInMinutes"
//!
//! [[site]]
//! id = "Broker::host"
//! type = "String"
//! key = "exchange.kafka.bootstrap.servers"
//! ```

use super::registry::SiteRegistry;
use crate::domain::context::ResultExt;
use crate::domain::{ConfigError, Result, ScalarType};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    site: Vec<SiteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteEntry {
    id: String,
    #[serde(rename = "type")]
    required_type: String,
    key: String,
}

/// Loads a site manifest file into a [`SiteRegistry`]
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, is not valid
/// TOML, or registers an invalid or duplicate site.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<SiteRegistry> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::Manifest(format!(
            "Site manifest not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read site manifest {}", path.display()))?;

    parse_manifest(&contents)
}

/// Parses manifest text into a [`SiteRegistry`]
pub fn parse_manifest(contents: &str) -> Result<SiteRegistry> {
    let manifest: Manifest = toml::from_str(contents)?;

    let mut builder = SiteRegistry::builder();
    for entry in manifest.site {
        let required_type = ScalarType::from_name(&entry.required_type);
        builder = builder.register(entry.id, required_type, entry.key);
    }

    let registry = builder.build()?;
    tracing::debug!(sites = registry.len(), "Loaded site manifest");
    Ok(registry)
}
