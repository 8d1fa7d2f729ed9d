//! Injection-site metadata
//!
//! An [`InjectionSite`] describes one resolution request: the scalar type the
//! consumer wants, the program element the value is injected into, and the
//! parameter position when that element is a constructor or method.

use crate::domain::{ConfigKey, ScalarType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field receiving a configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<ConfigKey>,
}

/// A constructor or method receiving configuration values as parameters
///
/// `annotation` is a key declared on the executable itself;
/// `parameter_annotations` holds one optional key per parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executable {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<ConfigKey>,
    #[serde(default)]
    pub parameter_annotations: Vec<Option<ConfigKey>>,
}

impl Executable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            parameter_annotations: Vec::new(),
        }
    }

    /// Appends a parameter, optionally annotated with a configuration key
    pub fn param(mut self, annotation: Option<ConfigKey>) -> Self {
        self.parameter_annotations.push(annotation);
        self
    }

    /// Annotates the executable itself
    pub fn annotated(mut self, key: ConfigKey) -> Self {
        self.annotation = Some(key);
        self
    }

    /// Annotation of the parameter at `position`, if any
    pub fn parameter_annotation(&self, position: usize) -> Option<&ConfigKey> {
        self.parameter_annotations
            .get(position)
            .and_then(|annotation| annotation.as_ref())
    }
}

/// The program element enclosing an injection site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Field(Field),
    Constructor(Executable),
    Method(Executable),
}

impl Element {
    /// Annotation declared directly on the element
    pub fn annotation(&self) -> Option<&ConfigKey> {
        match self {
            Element::Field(field) => field.annotation.as_ref(),
            Element::Constructor(exec) | Element::Method(exec) => exec.annotation.as_ref(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Element::Field(field) => &field.name,
            Element::Constructor(exec) | Element::Method(exec) => &exec.name,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Element::Field(_) => "field",
            Element::Constructor(_) => "constructor",
            Element::Method(_) => "method",
        }
    }
}

/// One resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionSite {
    pub required_type: ScalarType,
    pub element: Element,
    /// Parameter position within a constructor or method; ignored for fields
    #[serde(default)]
    pub position: usize,
}

impl InjectionSite {
    /// Site for a field annotated with `key`
    pub fn field(name: impl Into<String>, required_type: ScalarType, key: ConfigKey) -> Self {
        Self {
            required_type,
            element: Element::Field(Field {
                name: name.into(),
                annotation: Some(key),
            }),
            position: 0,
        }
    }

    /// Site for the constructor parameter at `position`
    pub fn constructor_param(
        constructor: Executable,
        position: usize,
        required_type: ScalarType,
    ) -> Self {
        Self {
            required_type,
            element: Element::Constructor(constructor),
            position,
        }
    }

    /// Site for the method parameter at `position`
    pub fn method_param(method: Executable, position: usize, required_type: ScalarType) -> Self {
        Self {
            required_type,
            element: Element::Method(method),
            position,
        }
    }
}

impl fmt::Display for InjectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element {
            Element::Field(_) => write!(f, "field '{}'", self.element.name()),
            _ => write!(
                f,
                "{} '{}' parameter {}",
                self.element.kind(),
                self.element.name(),
                self.position
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ConfigKey {
        ConfigKey::new(k).unwrap()
    }

    #[test]
    fn test_parameter_annotation_lookup() {
        let ctor = Executable::new("Repository::new")
            .param(None)
            .param(Some(key("repository.limit")));

        assert_eq!(ctor.parameter_annotation(0), None);
        assert_eq!(ctor.parameter_annotation(1), Some(&key("repository.limit")));
        assert_eq!(ctor.parameter_annotation(7), None);
    }

    #[test]
    fn test_element_annotation() {
        let site = InjectionSite::field("port", ScalarType::Integer, key("server.port"));
        assert_eq!(site.element.annotation(), Some(&key("server.port")));

        let method = Element::Method(Executable::new("configure"));
        assert_eq!(method.annotation(), None);
    }

    #[test]
    fn test_display() {
        let site = InjectionSite::field("port", ScalarType::Integer, key("server.port"));
        assert_eq!(site.to_string(), "field 'port'");

        let site = InjectionSite::method_param(
            Executable::new("configure").param(None),
            0,
            ScalarType::Text,
        );
        assert_eq!(site.to_string(), "method 'configure' parameter 0");
    }
}
