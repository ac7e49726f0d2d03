//! Call options forwarded to chat clients
//!
//! Agent orchestration frameworks hand their models an open-ended bag of
//! keyword options with every call. A few of those keys are bookkeeping for
//! the framework itself ("callbacks", "from_task", "from_agent") and strict
//! chat-completion APIs reject request bodies that carry them, so they must
//! be stripped before a request leaves the process.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Option keys injected by orchestration frameworks that chat APIs reject
pub const BLOCKED_OPTIONS: [&str; 3] = ["callbacks", "from_task", "from_agent"];

/// Ordered mapping of caller-supplied completion options
///
/// Serializes as a plain JSON object so it can be flattened into a request
/// body. Insertion order is preserved end to end, so the wrapped client sees
/// the surviving options in the order the caller supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallOptions(IndexMap<String, Value>);

impl CallOptions {
    /// Create an empty option set
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert an option, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up an option by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove an option, preserving the order of the remaining entries
    ///
    /// Returns `None` (and leaves the mapping untouched) when the key is
    /// absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of options
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the option set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the options in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Drop every key in [`BLOCKED_OPTIONS`], returning the names removed
    ///
    /// Absent keys are skipped; entries outside the blocked set are left
    /// untouched and keep their relative order.
    pub fn strip_blocked(&mut self) -> Vec<String> {
        let mut removed = Vec::new();
        for key in BLOCKED_OPTIONS {
            if self.0.shift_remove(key).is_some() {
                removed.push(key.to_string());
            }
        }
        removed
    }
}

impl From<IndexMap<String, Value>> for CallOptions {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for CallOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
