//! Scalar types and typed configuration values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar type requested by an injection site
///
/// Only `Text`, `Integer` and `Boolean` can be resolved. Any other requested
/// type is kept as `Other` so resolution can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Raw text, returned unchanged
    Text,
    /// Base-10 signed 32-bit integer
    Integer,
    /// Loosely parsed boolean
    Boolean,
    /// Any unsupported type, named as the site declared it
    #[serde(untagged)]
    Other(String),
}

impl ScalarType {
    /// Maps a type name to a scalar type
    ///
    /// Accepts the common spellings of the three scalar kinds; anything else
    /// becomes `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "text" | "string" | "str" => ScalarType::Text,
            "integer" | "int" | "i32" => ScalarType::Integer,
            "boolean" | "bool" => ScalarType::Boolean,
            _ => ScalarType::Other(name.trim().to_string()),
        }
    }

    /// Whether the resolver can coerce into this type
    pub fn is_supported(&self) -> bool {
        !matches!(self, ScalarType::Other(_))
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Text => write!(f, "String"),
            ScalarType::Integer => write!(f, "int"),
            ScalarType::Boolean => write!(f, "boolean"),
            ScalarType::Other(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for ScalarType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// A resolved, typed configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Integer(i32),
    Boolean(bool),
}

impl ConfigValue {
    /// The scalar type of this value
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ConfigValue::Text(_) => ScalarType::Text,
            ConfigValue::Integer(_) => ScalarType::Integer,
            ConfigValue::Boolean(_) => ScalarType::Boolean,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => write!(f, "{s}"),
            ConfigValue::Integer(i) => write!(f, "{i}"),
            ConfigValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}
