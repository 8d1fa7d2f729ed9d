// confinject - Typed configuration injection
// Copyright (c) 2025 Confinject Contributors
// Licensed under the MIT License

//! # confinject - typed configuration injection
//!
//! confinject supplies typed configuration values (text, integer, boolean)
//! to the injection points of a running service.
//!
//! ## Overview
//!
//! Values come, in priority order, from:
//! - **environment variables**: key `a.b.c` is read from `A_B_C`
//! - **a bootstrap property file**: the first of `explorviz-test.properties`,
//!   `explorviz-custom.properties`, `explorviz.properties` found on the
//!   lookup path
//!
//! An override channel lets a caller (typically a test harness) install a
//! replacement property set; it is merged once, on the first resolution.
//!
//! ## Architecture
//!
//! - [`core`] - the [`ConfigProvider`](core::ConfigProvider) resolution engine
//! - [`source`] - property file format and bootstrap source selection
//! - [`site`] - injection-site metadata and explicit registration
//! - [`domain`] - identifiers, values and errors
//! - [`config`] - configuration of the tool itself
//! - [`logging`] - structured logging
//! - [`cli`] - command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use confinject::core::ConfigProvider;
//! use confinject::domain::{ConfigKey, ScalarType};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ConfigProvider::builder()
//!     .search_paths(["resources", "."])
//!     .build()?;
//!
//! let port = provider.resolve_key(&ConfigKey::new("server.port")?, &ScalarType::Integer)?;
//! println!("port = {port}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Explicit site registration
//!
//! ```rust,no_run
//! use confinject::core::ConfigProvider;
//! use confinject::domain::{ScalarType, SiteId};
//! use confinject::site::SiteRegistry;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SiteRegistry::builder()
//!     .register("Repository::limit", ScalarType::Integer, "repository.limit")
//!     .build()?;
//!
//! let provider = ConfigProvider::new()?;
//! let limit = provider.resolve_registered(&registry, &SiteId::new("Repository::limit")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::ConfigError`]. The framework-facing
//! [`InjectionResolver`](core::InjectionResolver) collapses every failure into
//! one opaque [`domain::InternalError`]; only the log names the cause.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod site;
pub mod source;
