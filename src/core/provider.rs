//! The configuration provider
//!
//! [`ConfigProvider`] is constructed once at startup and shared by reference
//! (usually an `Arc`) with every consumer. Each resolution runs the same
//! pipeline:
//!
//! 1. merge pending overrides, once per lifetime
//! 2. locate the site's configuration key
//! 3. apply the environment/file precedence chain
//! 4. coerce the raw text into the requested scalar type

use super::coerce::{self, coerce, UNRESOLVED_PLACEHOLDER};
use super::environment::{Environment, ProcessEnvironment};
use super::inspector::locate_key;
use super::lifecycle::{Lifecycle, LifecycleEvent, LifecycleState};
use super::overrides::OverrideChannel;
use super::table::{merge_into, PropertyTable};
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result, ScalarType, SiteId};
use crate::site::{InjectionSite, SiteRegistry};
use crate::source::{BootstrapSource, Properties, SourceLoader};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a looked-up value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    Environment,
    Table,
}

/// Builder for [`ConfigProvider`]
#[derive(Debug, Default)]
pub struct ConfigProviderBuilder {
    loader: SourceLoader,
    overrides: OverrideChannel,
    environment: Option<Box<dyn Environment>>,
}

impl ConfigProviderBuilder {
    /// Replaces the source loader
    pub fn loader(mut self, loader: SourceLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Replaces the lookup path of the source loader
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.loader = self.loader.with_search_paths(paths);
        self
    }

    /// Shares an override channel with the provider
    ///
    /// If the channel already holds a property set at build time, it is used
    /// instead of probing for a bootstrap file.
    pub fn overrides(mut self, channel: OverrideChannel) -> Self {
        self.overrides = channel;
        self
    }

    /// Replaces the process environment
    pub fn environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Loads the bootstrap source and builds the provider
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bootstrap`] when no bootstrap file is found or
    /// the found file cannot be parsed.
    pub fn build(self) -> Result<ConfigProvider> {
        let lifecycle = Lifecycle::new();

        let (source, properties) = match self.overrides.get() {
            Some(passed) => {
                tracing::info!("Using passed properties.");
                (BootstrapSource::passed(), passed)
            }
            None => self.loader.load()?,
        };

        let table = PropertyTable::new(properties);
        lifecycle
            .transition(LifecycleEvent::Load)
            .map_err(|state| ConfigError::Other(format!("provider already {state}")))?;

        tracing::info!(
            source = %source,
            properties = table.len(),
            "Configuration provider ready"
        );

        Ok(ConfigProvider {
            table,
            lifecycle,
            overrides: self.overrides,
            environment: self
                .environment
                .unwrap_or_else(|| Box::new(ProcessEnvironment)),
            source,
        })
    }
}

/// Typed configuration resolution engine
#[derive(Debug)]
pub struct ConfigProvider {
    table: PropertyTable,
    lifecycle: Lifecycle,
    overrides: OverrideChannel,
    environment: Box<dyn Environment>,
    source: BootstrapSource,
}

impl ConfigProvider {
    pub fn builder() -> ConfigProviderBuilder {
        ConfigProviderBuilder::default()
    }

    /// Provider probing the current directory with the process environment
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// The bootstrap source that seeded the property table
    pub fn source(&self) -> &BootstrapSource {
        &self.source
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Handle to the provider's override channel
    pub fn overrides(&self) -> &OverrideChannel {
        &self.overrides
    }

    /// Installs a pending override set
    ///
    /// Has an effect only if no override set has been merged yet.
    pub fn set_overrides(&self, properties: Properties) {
        if self.state() == LifecycleState::OverrideApplied {
            tracing::warn!("Override properties already applied; new set will not be merged");
        }
        self.overrides.set(properties);
    }

    /// Sorted copy of the property table
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.table.snapshot()
    }

    /// Resolves the value for an injection site
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedType`] for a type other than text, integer
    ///   or boolean
    /// - [`ConfigError::MissingAnnotation`] when the site declares no key
    /// - [`ConfigError::Coercion`] when an integer site resolves to non-integer
    ///   text
    pub fn resolve_site(&self, site: &InjectionSite) -> Result<ConfigValue> {
        self.apply_pending_overrides();

        if let ScalarType::Other(name) = &site.required_type {
            return Err(coerce::unsupported(name));
        }

        let key = locate_key(site)?;
        self.resolve_raw(key, &site.required_type)
    }

    /// Resolves `key` directly as `required_type`
    pub fn resolve_key(&self, key: &ConfigKey, required_type: &ScalarType) -> Result<ConfigValue> {
        self.apply_pending_overrides();
        self.resolve_raw(key, required_type)
    }

    /// Resolves a site registered under `id`
    ///
    /// # Errors
    ///
    /// An id missing from the registry is a [`ConfigError::MissingAnnotation`]:
    /// nothing declares a key for it.
    pub fn resolve_registered(&self, registry: &SiteRegistry, id: &SiteId) -> Result<ConfigValue> {
        let site = registry.get(id).ok_or_else(|| {
            tracing::error!(site_id = %id, "No site registered under this id");
            ConfigError::MissingAnnotation(format!("no site registered as '{id}'"))
        })?;
        self.resolve_site(site)
    }

    /// Raw text for `key` after the precedence chain, without coercion
    ///
    /// An environment variable named after the key wins over the table.
    pub fn lookup(&self, key: &ConfigKey) -> Option<String> {
        self.lookup_with_origin(key).map(|(value, _)| value)
    }

    /// Like [`lookup`](Self::lookup), also reporting where the value came from
    pub fn lookup_with_origin(&self, key: &ConfigKey) -> Option<(String, ValueOrigin)> {
        let env_name = key.env_var_name();
        if let Some(value) = self.environment.var(&env_name) {
            tracing::trace!(key = %key, env = %env_name, "Using environment variable");
            return Some((value, ValueOrigin::Environment));
        }
        self.table
            .get(key.as_str())
            .map(|value| (value, ValueOrigin::Table))
    }

    fn resolve_raw(&self, key: &ConfigKey, required_type: &ScalarType) -> Result<ConfigValue> {
        if let ScalarType::Other(name) = required_type {
            return Err(coerce::unsupported(name));
        }

        let raw = self.lookup(key).unwrap_or_else(|| {
            tracing::error!(key = %key, "Couldn't resolve property with key {}", key);
            UNRESOLVED_PLACEHOLDER.to_string()
        });

        coerce(key, raw, required_type)
    }

    /// Merges the pending override set on the first call after one was
    /// installed; later calls do nothing
    ///
    /// Every resolution calls this first. Returns `true` only for the call
    /// that performed the merge.
    pub fn apply_pending_overrides(&self) -> bool {
        if self.lifecycle.state() != LifecycleState::Loaded {
            return false;
        }
        let Some(pending) = self.overrides.get() else {
            return false;
        };

        // The transition and the merge share one write lock, so a caller
        // losing the race cannot read the table before the merge completes.
        let mut entries = self.table.write();
        if self
            .lifecycle
            .transition(LifecycleEvent::ApplyOverrides)
            .is_ok()
        {
            let replaced = merge_into(&mut entries, &pending);
            tracing::info!(
                properties = pending.len(),
                replaced,
                "Updated config injection due to passed properties."
            );
            return true;
        }
        false
    }
}
