//! Typed configuration resolution engine
//!
//! This module contains the resolution pipeline:
//! - [`provider`] - the [`ConfigProvider`] and its builder
//! - [`overrides`] - the one-shot override channel
//! - [`lifecycle`] - the `Unloaded -> Loaded -> OverrideApplied` state machine
//! - [`inspector`] - locating a site's configuration key
//! - [`coerce`] - scalar coercion
//! - [`resolver`] - the framework-facing [`InjectionResolver`] trait

pub mod coerce;
pub mod environment;
pub mod inspector;
pub mod lifecycle;
pub mod overrides;
pub mod provider;
pub mod resolver;
pub mod table;

pub use coerce::{parse_bool_loose, UNRESOLVED_PLACEHOLDER};
pub use environment::{Environment, MapEnvironment, ProcessEnvironment};
pub use lifecycle::{Lifecycle, LifecycleEvent, LifecycleState};
pub use overrides::OverrideChannel;
pub use provider::{ConfigProvider, ConfigProviderBuilder, ValueOrigin};
pub use resolver::InjectionResolver;
pub use table::PropertyTable;
