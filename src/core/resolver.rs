//! Framework-facing injection interface
//!
//! The hosting dependency-injection framework calls
//! [`InjectionResolver::resolve`] once per injection point. Whatever went
//! wrong, it only ever receives an [`InternalError`]; the cause is logged.

use super::provider::ConfigProvider;
use crate::domain::{ConfigValue, InternalError};
use crate::site::InjectionSite;

pub trait InjectionResolver: Send + Sync {
    /// Resolves the value to inject at `site`
    fn resolve(&self, site: &InjectionSite) -> Result<ConfigValue, InternalError>;

    /// Whether this resolver injects constructor parameters
    fn is_constructor_parameter_indicator(&self) -> bool;

    /// Whether this resolver injects method parameters
    fn is_method_parameter_indicator(&self) -> bool;
}

impl InjectionResolver for ConfigProvider {
    fn resolve(&self, site: &InjectionSite) -> Result<ConfigValue, InternalError> {
        self.resolve_site(site).map_err(|e| {
            tracing::error!(site = %site, error = %e, "Property injection failed");
            InternalError::from(e)
        })
    }

    fn is_constructor_parameter_indicator(&self) -> bool {
        true
    }

    fn is_method_parameter_indicator(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::environment::MapEnvironment;
    use crate::core::overrides::OverrideChannel;
    use crate::domain::{ConfigKey, ScalarType};
    use crate::source::Properties;

    fn provider() -> ConfigProvider {
        let channel = OverrideChannel::new();
        channel.set(Properties::from([
            ("server.port".to_string(), "abc".to_string()),
            ("server.name".to_string(), "landscape".to_string()),
        ]));
        ConfigProvider::builder()
            .overrides(channel)
            .environment(MapEnvironment::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_declares_parameter_injection() {
        let provider = provider();
        let resolver: &dyn InjectionResolver = &provider;
        assert!(resolver.is_constructor_parameter_indicator());
        assert!(resolver.is_method_parameter_indicator());
    }

    #[test]
    fn test_success_passes_value_through() {
        let provider = provider();
        let site = InjectionSite::field(
            "name",
            ScalarType::Text,
            ConfigKey::new("server.name").unwrap(),
        );
        assert_eq!(
            provider.resolve(&site),
            Ok(ConfigValue::Text("landscape".to_string()))
        );
    }

    #[test]
    fn test_failure_is_opaque() {
        let provider = provider();
        let site = InjectionSite::field(
            "port",
            ScalarType::Integer,
            ConfigKey::new("server.port").unwrap(),
        );
        let err = provider.resolve(&site).unwrap_err();
        assert_eq!(err, InternalError::new());
        assert_eq!(err.status(), 500);
    }
}
