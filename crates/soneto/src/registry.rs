//! Selector registry: the merged name-to-locator mapping.
//!
//! A registry starts out *unloaded*. Any load (including a load of zero
//! documents) transitions it to loaded; from then on lookups succeed even
//! against an empty mapping. The loaded/unloaded distinction is the only
//! state machine in the crate: every verb guards on it before touching the
//! driver.

use std::collections::HashMap;

use crate::result::{SonetoError, SonetoResult};

/// Name-to-locator mapping with an explicit loaded/unloaded lifecycle.
///
/// Values are opaque strings: XPath expressions, CSS paths, or script
/// snippets. The registry never interprets them; it only stores and
/// resolves them.
#[derive(Debug, Clone, Default)]
pub struct SelectorRegistry {
    entries: Option<HashMap<String, String>>,
}

impl SelectorRegistry {
    /// Create an unloaded registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any load has happened yet
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Transition to loaded without merging any entries.
    ///
    /// Used by the zero-document load: the mapping exists and is empty.
    pub fn mark_loaded(&mut self) {
        self.entries.get_or_insert_with(HashMap::new);
    }

    /// Merge a parsed document into the mapping, marking it loaded.
    ///
    /// Collisions are resolved last-writer-wins, so documents merged later
    /// override same-named entries from earlier ones.
    pub fn merge(&mut self, entries: HashMap<String, String>) {
        self.entries
            .get_or_insert_with(HashMap::new)
            .extend(entries);
    }

    /// Insert a single entry programmatically, marking the registry loaded
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self
            .entries
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
    }

    /// Fail unless a load has happened
    pub fn ensure_loaded(&self) -> SonetoResult<()> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(SonetoError::SelectorsNotLoaded)
        }
    }

    /// Resolve a name to its stored value.
    ///
    /// Errors if the registry was never loaded. An unknown name is not an
    /// error here: it resolves to `None`, and the dispatcher decides whether
    /// to forward that as-is (permissive) or reject it (strict mode).
    pub fn resolve(&self, name: &str) -> SonetoResult<Option<&str>> {
        match &self.entries {
            Some(map) => Ok(map.get(name).map(String::as_str)),
            None => Err(SonetoError::SelectorsNotLoaded),
        }
    }

    /// Whether a name has an entry
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|map| map.contains_key(name))
    }

    /// Number of entries (zero when unloaded)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    /// Whether the mapping has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered names, in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Back to the unloaded state (test lifecycle hook)
    pub fn reset(&mut self) {
        self.entries = None;
    }
}

/// Parse one selector document: a flat YAML mapping of string names to
/// string locator/script values.
pub(crate) fn parse_document(yaml: &str) -> Result<HashMap<String, String>, serde_yaml_ng::Error> {
    serde_yaml_ng::from_str(yaml)
}
