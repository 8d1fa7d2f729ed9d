//! Domain types for confinject.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ConfigKey`], [`SiteId`])
//! - **Typed values** ([`ScalarType`], [`ConfigValue`])
//! - **Error types** ([`ConfigError`], [`InternalError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, ConfigError>`]. At the
//! framework boundary every error collapses into [`InternalError`]:
//!
//! ```rust
//! use confinject::domain::{ConfigError, InternalError};
//!
//! let cause = ConfigError::UnsupportedType("double".to_string());
//! let surfaced: InternalError = cause.into();
//! assert_eq!(surfaced.status(), 500);
//! ```

pub mod context;
pub mod errors;
pub mod ids;
pub mod result;
pub mod value;

// Re-export commonly used types for convenience
pub use errors::{ConfigError, InternalError};
pub use ids::{ConfigKey, SiteId};
pub use result::Result;
pub use value::{ConfigValue, ScalarType};
