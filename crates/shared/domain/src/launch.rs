//! The lifecycle event handed to the coordinator at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque platform-supplied options mapping.
///
/// Owned by the platform, passed by reference into the coordinator and
/// never retained beyond the launch call.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    entries: BTreeMap<String, String>,
}

impl LaunchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single option value, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over option entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LaunchOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
