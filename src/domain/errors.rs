//! Domain error types
//!
//! This module defines the error hierarchy for confinject. [`ConfigError`]
//! carries the detailed cause of a failure; [`InternalError`] is the opaque
//! signal handed to the hosting framework, which never learns the cause.

use serde::Serialize;
use thiserror::Error;

/// Detail message carried by every [`InternalError`]
pub const INTERNAL_ERROR_DETAIL: &str =
    "An internal server error occured. Contact your administrator.";

/// HTTP status reported for an [`InternalError`]
pub const INTERNAL_ERROR_STATUS: u16 = 500;

/// Main confinject error type
///
/// Every fallible operation inside the library returns this type. Only the
/// log output (and this enum) distinguishes the causes; callers at the
/// framework boundary see an [`InternalError`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No bootstrap property file was found, or the found file failed to parse
    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    /// An injection site carries no configuration key
    #[error("Missing @Config annotation: {0}")]
    MissingAnnotation(String),

    /// An integer-typed site resolved to text that is not an integer
    #[error("Cannot coerce property '{key}' value '{value}' to int: {reason}")]
    Coercion {
        key: String,
        value: String,
        reason: String,
    },

    /// A site requested a scalar type other than text, integer or boolean
    #[error("Type '{0}' for property injection is not valid. Use String, int or boolean.")]
    UnsupportedType(String),

    /// Site manifest or registry problems
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ConfigError {
    /// Whether this error must abort engine construction
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(self, ConfigError::Bootstrap(_))
    }
}

/// The single opaque error surfaced to the hosting framework
///
/// Every [`ConfigError`] collapses into this value. It always carries status
/// 500 and the same generic detail text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct InternalError {
    status: u16,
    detail: &'static str,
}

impl InternalError {
    /// Creates the generic internal error
    pub fn new() -> Self {
        Self {
            status: INTERNAL_ERROR_STATUS,
            detail: INTERNAL_ERROR_DETAIL,
        }
    }

    /// HTTP status code of this error
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Generic detail text of this error
    pub fn detail(&self) -> &str {
        self.detail
    }

    /// Renders the error object the service's exception mappers respond with
    pub fn to_error_object(&self) -> serde_json::Value {
        let object = ErrorDocument {
            errors: vec![ErrorObject {
                status: self.status.to_string(),
                title: "Internal Server Error",
                detail: self.detail,
            }],
        };
        serde_json::to_value(object).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for InternalError {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ConfigError> for InternalError {
    fn from(_: ConfigError) -> Self {
        InternalError::new()
    }
}

#[derive(Serialize)]
struct ErrorDocument {
    errors: Vec<ErrorObject>,
}

#[derive(Serialize)]
struct ErrorObject {
    status: String,
    title: &'static str,
    detail: &'static str,
}

// Conversion from std::io::Error
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Manifest(format!("TOML parse error: {err}"))
    }
}
