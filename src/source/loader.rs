//! Bootstrap source selection
//!
//! Probes the candidate property files in fixed priority (test, custom,
//! default) over an ordered lookup path and loads the first one found.

use super::properties::{parse_properties, Properties};
use crate::domain::context::ResultExt;
use crate::domain::{ConfigError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the default bootstrap source
pub const PROPERTIES_DEFAULT_FILENAME: &str = "explorviz.properties";

/// File name of the custom bootstrap source
pub const PROPERTIES_CUSTOM_FILENAME: &str = "explorviz-custom.properties";

/// File name of the test bootstrap source
pub const PROPERTIES_TEST_FILENAME: &str = "explorviz-test.properties";

/// Which bootstrap source seeded the property table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Test,
    Custom,
    Default,
    /// Properties handed over before construction instead of a file
    Passed,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Test => write!(f, "test"),
            SourceKind::Custom => write!(f, "custom"),
            SourceKind::Default => write!(f, "default"),
            SourceKind::Passed => write!(f, "passed"),
        }
    }
}

/// The selected bootstrap source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSource {
    pub kind: SourceKind,
    /// File the properties were read from; `None` for passed properties
    pub path: Option<PathBuf>,
}

impl BootstrapSource {
    pub fn passed() -> Self {
        Self {
            kind: SourceKind::Passed,
            path: None,
        }
    }
}

impl fmt::Display for BootstrapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} ({})", self.kind, path.display()),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Probes and loads the bootstrap property file
#[derive(Debug, Clone)]
pub struct SourceLoader {
    search_paths: Vec<PathBuf>,
    test_filename: String,
    custom_filename: String,
    default_filename: String,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from(".")],
            test_filename: PROPERTIES_TEST_FILENAME.to_string(),
            custom_filename: PROPERTIES_CUSTOM_FILENAME.to_string(),
            default_filename: PROPERTIES_DEFAULT_FILENAME.to_string(),
        }
    }
}

impl SourceLoader {
    /// Loader probing the current directory for the standard file names
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the lookup path; directories are probed in the given order
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the candidate file names
    pub fn with_filenames(
        mut self,
        test: impl Into<String>,
        custom: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.test_filename = test.into();
        self.custom_filename = custom.into();
        self.default_filename = default.into();
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Finds the highest-priority candidate on the lookup path
    ///
    /// Each file name is searched across every directory before the next,
    /// lower-priority name is tried.
    pub fn probe(&self) -> Option<BootstrapSource> {
        let candidates = [
            (SourceKind::Test, &self.test_filename),
            (SourceKind::Custom, &self.custom_filename),
            (SourceKind::Default, &self.default_filename),
        ];

        candidates.into_iter().find_map(|(kind, filename)| {
            self.find_file(filename).map(|path| BootstrapSource {
                kind,
                path: Some(path),
            })
        })
    }

    fn find_file(&self, filename: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(filename))
            .find(|path| path.is_file())
    }

    /// Probes and fully loads the bootstrap source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bootstrap`] if no candidate exists on the lookup
    /// path, or the found file cannot be read or parsed.
    pub fn load(&self) -> Result<(BootstrapSource, Properties)> {
        let Some(source) = self.probe() else {
            tracing::error!(
                search_paths = ?self.search_paths,
                "Couldn't load default property file."
            );
            return Err(ConfigError::Bootstrap(format!(
                "none of {}, {}, {} found on lookup path {:?}",
                self.test_filename, self.custom_filename, self.default_filename, self.search_paths
            )));
        };

        match source.kind {
            SourceKind::Test => tracing::info!("Using test property file."),
            SourceKind::Custom => tracing::info!("Using custom property file."),
            _ => tracing::info!("Using default property file."),
        }

        let path = source.path.as_deref().unwrap_or_else(|| Path::new(""));
        let properties = read_properties(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Couldn't load property file.");
            e
        })?;

        tracing::debug!(
            path = %path.display(),
            properties = properties.len(),
            "Loaded bootstrap properties"
        );

        Ok((source, properties))
    }
}

/// Reads and parses one property file
pub fn read_properties(path: &Path) -> Result<Properties> {
    let bytes = fs::read(path)
        .map_err(|e| ConfigError::Bootstrap(format!("Failed to read {}: {e}", path.display())))?;

    let contents = String::from_utf8(bytes).map_err(|e| {
        ConfigError::Bootstrap(format!("{} is not valid UTF-8: {e}", path.display()))
    })?;

    parse_properties(&contents).with_context(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_probe_order_prefers_test_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PROPERTIES_DEFAULT_FILENAME, "origin=default\n");
        write(dir.path(), PROPERTIES_CUSTOM_FILENAME, "origin=custom\n");
        write(dir.path(), PROPERTIES_TEST_FILENAME, "origin=test\n");

        let loader = SourceLoader::new().with_search_paths([dir.path()]);
        let (source, props) = loader.load().unwrap();

        assert_eq!(source.kind, SourceKind::Test);
        assert_eq!(props["origin"], "test");
    }

    #[test]
    fn test_custom_before_default() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PROPERTIES_DEFAULT_FILENAME, "origin=default\n");
        write(dir.path(), PROPERTIES_CUSTOM_FILENAME, "origin=custom\n");

        let loader = SourceLoader::new().with_search_paths([dir.path()]);
        let (source, props) = loader.load().unwrap();

        assert_eq!(source.kind, SourceKind::Custom);
        assert_eq!(props["origin"], "custom");
    }

    #[test]
    fn test_name_priority_beats_directory_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), PROPERTIES_DEFAULT_FILENAME, "origin=default\n");
        write(second.path(), PROPERTIES_TEST_FILENAME, "origin=test\n");

        let loader = SourceLoader::new().with_search_paths([first.path(), second.path()]);
        let source = loader.probe().unwrap();

        assert_eq!(source.kind, SourceKind::Test);
        assert_eq!(
            source.path.unwrap(),
            second.path().join(PROPERTIES_TEST_FILENAME)
        );
    }

    #[test]
    fn test_first_directory_wins_for_same_name() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), PROPERTIES_DEFAULT_FILENAME, "origin=first\n");
        write(second.path(), PROPERTIES_DEFAULT_FILENAME, "origin=second\n");

        let loader = SourceLoader::new().with_search_paths([first.path(), second.path()]);
        let (_, props) = loader.load().unwrap();
        assert_eq!(props["origin"], "first");
    }

    #[test]
    fn test_no_candidate_is_bootstrap_error() {
        let dir = TempDir::new().unwrap();
        let loader = SourceLoader::new().with_search_paths([dir.path()]);

        assert!(loader.probe().is_none());
        assert!(matches!(loader.load(), Err(ConfigError::Bootstrap(_))));
    }

    #[test]
    fn test_directory_named_like_candidate_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(PROPERTIES_TEST_FILENAME)).unwrap();
        write(dir.path(), PROPERTIES_DEFAULT_FILENAME, "origin=default\n");

        let loader = SourceLoader::new().with_search_paths([dir.path()]);
        assert_eq!(loader.probe().unwrap().kind, SourceKind::Default);
    }

    #[test]
    fn test_unparseable_file_is_bootstrap_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PROPERTIES_DEFAULT_FILENAME, "bad=\\uZZZZ\n");

        let loader = SourceLoader::new().with_search_paths([dir.path()]);
        match loader.load() {
            Err(ConfigError::Bootstrap(msg)) => assert!(msg.contains(PROPERTIES_DEFAULT_FILENAME)),
            other => panic!("expected bootstrap error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_bootstrap_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROPERTIES_DEFAULT_FILENAME), [0x6b, 0x3d, 0xff]).unwrap();

        let loader = SourceLoader::new().with_search_paths([dir.path()]);
        assert!(matches!(loader.load(), Err(ConfigError::Bootstrap(_))));
    }

    #[test]
    fn test_custom_filenames() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app.properties", "origin=renamed\n");

        let loader = SourceLoader::new()
            .with_search_paths([dir.path()])
            .with_filenames("app-test.properties", "app-custom.properties", "app.properties");
        let (source, props) = loader.load().unwrap();

        assert_eq!(source.kind, SourceKind::Default);
        assert_eq!(props["origin"], "renamed");
    }
}
