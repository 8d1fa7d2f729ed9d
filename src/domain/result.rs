//! Result type alias for confinject
//!
//! This module provides a convenient Result type alias that uses ConfigError
//! as the error type.

use super::errors::ConfigError;

/// Result type alias for confinject operations
///
/// # Examples
///
/// ```
/// use confinject::domain::result::Result;
/// use confinject::domain::errors::ConfigError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ConfigError::MissingAnnotation("field 'port'".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ConfigError>;
