use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the current navigation state: path parameters and query string.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteState {
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
}

impl RouteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Resolves `key` from the path parameters first, then from the query string.
    ///
    /// An empty path parameter does not shadow the query value.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .filter(|value| !value.is_empty())
            .or_else(|| self.query.get(key))
            .map(String::as_str)
    }
}
