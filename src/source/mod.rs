//! Bootstrap property sources
//!
//! - [`parse_properties`] - the line-oriented `key=value` file format
//! - [`SourceLoader`] - probes test, custom and default files in that order

pub mod loader;
pub mod properties;

pub use loader::{
    read_properties, BootstrapSource, SourceKind, SourceLoader, PROPERTIES_CUSTOM_FILENAME,
    PROPERTIES_DEFAULT_FILENAME, PROPERTIES_TEST_FILENAME,
};
pub use properties::{parse_properties, Properties};
