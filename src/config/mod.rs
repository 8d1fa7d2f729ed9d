//! Configuration of the confinject tool itself.
//!
//! This is not the configuration confinject resolves for services (see
//! [`crate::core`] and [`crate::source`]); it covers how the tool logs.

pub mod schema;

pub use schema::LoggingConfig;
