//! Shared property table
//!
//! Maps configuration keys to raw text values. After the bootstrap load the
//! table only changes through [`PropertyTable::merge`], which runs under a
//! single write lock so readers see either the old or the merged table.

use crate::source::Properties;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct PropertyTable {
    entries: RwLock<Properties>,
}

impl PropertyTable {
    pub fn new(properties: Properties) -> Self {
        Self {
            entries: RwLock::new(properties),
        }
    }

    /// Raw value stored for `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Sorted copy of the current entries
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Overwrites existing keys and adds new ones; returns how many keys
    /// were replaced
    pub fn merge(&self, properties: &Properties) -> usize {
        merge_into(&mut self.entries.write(), properties)
    }

    /// Exclusive access for callers that must decide and merge atomically
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Properties> {
        self.entries.write()
    }
}

pub(crate) fn merge_into(entries: &mut Properties, properties: &Properties) -> usize {
    let mut replaced = 0;
    for (key, value) in properties {
        if entries.insert(key.clone(), value.clone()).is_some() {
            replaced += 1;
        }
    }
    replaced
}

impl From<Properties> for PropertyTable {
    fn from(properties: Properties) -> Self {
        Self::new(properties)
    }
}
