//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - human-readable or JSON console output
//! - configurable log levels, overridable by `RUST_LOG`
//! - optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use confinject::logging::init_logging;
//! use confinject::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
