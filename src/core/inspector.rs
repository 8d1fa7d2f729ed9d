//! Injection-site inspection
//!
//! Locates the configuration key an injection site declares: first on the
//! enclosing element itself, then in the constructor's or method's
//! per-parameter annotations at the site's position.

use crate::domain::{ConfigError, ConfigKey, Result};
use crate::site::{Element, InjectionSite};

/// Returns the configuration key declared for `site`
///
/// # Errors
///
/// Returns [`ConfigError::MissingAnnotation`] when no route yields a key,
/// including a parameter position past the end of the annotation list.
pub fn locate_key(site: &InjectionSite) -> Result<&ConfigKey> {
    if let Some(key) = site.element.annotation() {
        return Ok(key);
    }

    let from_parameter = match &site.element {
        Element::Constructor(ctor) => ctor.parameter_annotation(site.position),
        Element::Method(method) => method.parameter_annotation(site.position),
        Element::Field(_) => None,
    };

    from_parameter.ok_or_else(|| {
        tracing::error!(
            site = %site,
            "@Config property injection failed. Annotation for property injection is not present."
        );
        ConfigError::MissingAnnotation(site.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScalarType;
    use crate::site::{Executable, Field};

    fn key(k: &str) -> ConfigKey {
        ConfigKey::new(k).unwrap()
    }

    #[test]
    fn test_field_annotation() {
        let site = InjectionSite::field("port", ScalarType::Integer, key("server.port"));
        assert_eq!(locate_key(&site).unwrap(), &key("server.port"));
    }

    #[test]
    fn test_unannotated_field_fails() {
        let site = InjectionSite {
            required_type: ScalarType::Text,
            element: Element::Field(Field {
                name: "host".to_string(),
                annotation: None,
            }),
            position: 0,
        };
        assert!(matches!(
            locate_key(&site),
            Err(ConfigError::MissingAnnotation(_))
        ));
    }

    #[test]
    fn test_constructor_parameter_annotation() {
        let ctor = Executable::new("Service::new")
            .param(Some(key("service.name")))
            .param(Some(key("service.port")));
        let site = InjectionSite::constructor_param(ctor, 1, ScalarType::Integer);

        assert_eq!(locate_key(&site).unwrap(), &key("service.port"));
    }

    #[test]
    fn test_method_parameter_annotation() {
        let method = Executable::new("configure").param(Some(key("a.b")));
        let site = InjectionSite::method_param(method, 0, ScalarType::Text);

        assert_eq!(locate_key(&site).unwrap(), &key("a.b"));
    }

    #[test]
    fn test_element_annotation_takes_priority_over_parameter() {
        let method = Executable::new("configure")
            .annotated(key("on.method"))
            .param(Some(key("on.param")));
        let site = InjectionSite::method_param(method, 0, ScalarType::Text);

        assert_eq!(locate_key(&site).unwrap(), &key("on.method"));
    }

    #[test]
    fn test_unannotated_parameter_fails() {
        let ctor = Executable::new("Service::new")
            .param(Some(key("service.name")))
            .param(None);
        let site = InjectionSite::constructor_param(ctor, 1, ScalarType::Text);

        assert!(matches!(
            locate_key(&site),
            Err(ConfigError::MissingAnnotation(_))
        ));
    }

    #[test]
    fn test_position_out_of_range_fails() {
        let method = Executable::new("configure").param(Some(key("a.b")));
        let site = InjectionSite::method_param(method, 3, ScalarType::Text);

        assert!(matches!(
            locate_key(&site),
            Err(ConfigError::MissingAnnotation(_))
        ));
    }
}
