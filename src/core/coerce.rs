//! Scalar coercion of raw configuration text

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result, ScalarType};

/// Text coerced when a key is neither in the environment nor in the table
///
/// Resolution of an unknown key does not fail: an error is logged and this
/// placeholder is coerced instead, so a text site receives `"null"`, a
/// boolean site `false` and an integer site a coercion error.
pub const UNRESOLVED_PLACEHOLDER: &str = "null";

/// Coerces `raw` into `required_type`
///
/// - text: returned unchanged
/// - integer: base-10 `i32`; anything else is a [`ConfigError::Coercion`]
/// - boolean: `true` only for a case-insensitive `"true"`; never fails
/// - other types: [`ConfigError::UnsupportedType`]
pub fn coerce(key: &ConfigKey, raw: String, required_type: &ScalarType) -> Result<ConfigValue> {
    match required_type {
        ScalarType::Text => Ok(ConfigValue::Text(raw)),
        ScalarType::Integer => raw.parse::<i32>().map(ConfigValue::Integer).map_err(|e| {
            tracing::error!(key = %key, value = %raw, error = %e, "Property injection for type 'int' failed.");
            ConfigError::Coercion {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }
        }),
        ScalarType::Boolean => Ok(ConfigValue::Boolean(parse_bool_loose(&raw))),
        ScalarType::Other(name) => Err(unsupported(name)),
    }
}

/// `true` for any casing of `"true"`, `false` for everything else
pub fn parse_bool_loose(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

pub(crate) fn unsupported(name: &str) -> ConfigError {
    let err = ConfigError::UnsupportedType(name.to_string());
    tracing::error!("Property injection failed: {}", err);
    err
}
