//! Persisted per-user configuration written by other plugins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only access to integer config values by `(group, key)`
pub trait ConfigStore {
    fn get_int(&self, group: &str, key: &str) -> Option<i64>;
}

/// In-memory config store, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryConfigStore {
    groups: HashMap<String, HashMap<String, i64>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, group: impl Into<String>, key: impl Into<String>, value: i64) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(key.into(), value);
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get_int(&self, group: &str, key: &str) -> Option<i64> {
        self.groups.get(group)?.get(key).copied()
    }
}
