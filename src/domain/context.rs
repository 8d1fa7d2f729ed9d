//! Error context extension trait
//!
//! Adds `.context()` and `.with_context()` to `Result<T, E>` where `E`
//! converts into [`ConfigError`]. Unlike `anyhow::Context`, the error keeps
//! its variant: a bootstrap failure with context is still a bootstrap failure.
//!
//! # Examples
//!
//! ```rust
//! use confinject::domain::Result;
//! use confinject::domain::context::ResultExt;
//!
//! fn read_manifest(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read site manifest {}", path))
//! }
//! ```

use crate::domain::errors::ConfigError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error (evaluated eagerly)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display;

    /// Add context to an error using a closure (lazy evaluation)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ConfigError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display,
    {
        self.map_err(|e| prefix(e.into(), &context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| prefix(e.into(), &f()))
    }
}

fn prefix(err: ConfigError, context: &dyn std::fmt::Display) -> ConfigError {
    match err {
        ConfigError::Bootstrap(msg) => ConfigError::Bootstrap(format!("{context}: {msg}")),
        ConfigError::MissingAnnotation(msg) => {
            ConfigError::MissingAnnotation(format!("{context}: {msg}"))
        }
        ConfigError::Manifest(msg) => ConfigError::Manifest(format!("{context}: {msg}")),
        ConfigError::Io(msg) => ConfigError::Io(format!("{context}: {msg}")),
        other => ConfigError::Other(format!("{context}: {other}")),
    }
}
