//! Injection sites and explicit site registration
//!
//! - [`InjectionSite`] - metadata describing one resolution request
//! - [`SiteRegistry`] - explicit `(site id, type, key)` registrations
//! - [`load_manifest`] - TOML manifest loading into a registry

pub mod injection;
pub mod manifest;
pub mod registry;

pub use injection::{Element, Executable, Field, InjectionSite};
pub use manifest::{load_manifest, parse_manifest};
pub use registry::{SiteRegistry, SiteRegistryBuilder};
