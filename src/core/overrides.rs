//! Override channel
//!
//! A cloneable handle through which a caller (typically a test harness)
//! installs a replacement property set. Installing does not touch the
//! property table; the engine merges the pending set on the first resolution
//! after it was installed, and never again.
//!
//! # Example
//!
//! ```rust
//! use confinject::core::OverrideChannel;
//!
//! let channel = OverrideChannel::new();
//! channel.set([("x.y".to_string(), "1".to_string())].into_iter().collect());
//! assert_eq!(channel.get().unwrap()["x.y"], "1");
//! ```

use crate::source::Properties;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct OverrideChannel {
    pending: Arc<RwLock<Option<Properties>>>,
}

impl OverrideChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `properties` as the pending override set
    pub fn set(&self, properties: Properties) {
        tracing::debug!(properties = properties.len(), "Override properties installed");
        *self.pending.write() = Some(properties);
    }

    /// Copy of the pending override set, if one was ever installed
    pub fn get(&self) -> Option<Properties> {
        self.pending.read().clone()
    }

    pub fn is_set(&self) -> bool {
        self.pending.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_channel() {
        let channel = OverrideChannel::new();
        assert!(!channel.is_set());
        assert!(channel.get().is_none());
    }

    #[test]
    fn test_clones_share_pending_set() {
        let channel = OverrideChannel::new();
        let handle = channel.clone();

        handle.set(Properties::from([("a".to_string(), "1".to_string())]));

        assert!(channel.is_set());
        assert_eq!(channel.get().unwrap()["a"], "1");
    }

    #[test]
    fn test_set_replaces_previous() {
        let channel = OverrideChannel::new();
        channel.set(Properties::from([("a".to_string(), "1".to_string())]));
        channel.set(Properties::from([("b".to_string(), "2".to_string())]));

        let pending = channel.get().unwrap();
        assert!(!pending.contains_key("a"));
        assert_eq!(pending["b"], "2");
    }
}
