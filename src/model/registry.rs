use crate::model::{eq_fold, Input, ObjectIdentifier, Term};
use crate::parse::Error;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// A caller owned mapping of arbitrary names to object identifiers.
///
/// All access goes through one lock that lives as long as the map. Entries
/// are visited in key order, so lookups that match more than one entry
/// always return the entry with the smallest key.
#[derive(Debug, Default)]
pub struct ObjectIdentifierMap {
    entries: RwLock<BTreeMap<String, ObjectIdentifier>>,
}

impl ObjectIdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the map half-updated, so a poisoned lock still
    // guards consistent data
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, ObjectIdentifier>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, ObjectIdentifier>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `value` under `key` and returns the value it replaced
    pub fn set(
        &self,
        key: impl Into<String>,
        value: ObjectIdentifier,
    ) -> Option<ObjectIdentifier> {
        let key = key.into();
        debug!("Setting {} to {}", key, value.to_dotted());
        self.write().insert(key, value)
    }

    /// Parses `raw` and stores the result under `key`. On failure the map
    /// is left as it was.
    ///
    /// Parsing happens before the lock is taken, a concurrent
    /// [`ObjectIdentifierMap::get`] may or may not see the new entry.
    pub fn new_entry<'a>(
        &self,
        key: impl Into<String>,
        raw: impl Into<Input<'a>>,
    ) -> Result<(), Error> {
        let key = key.into();
        let oid = ObjectIdentifier::parse(raw).map_err(|e| {
            debug!("Not adding {}: {}", key, e);
            e
        })?;
        self.set(key, oid);
        Ok(())
    }

    /// Finds the first entry, in key order, whose value is [equal](ObjectIdentifier::equal)
    /// to `term` or, for textual terms, whose key matches `term` ignoring case
    pub fn get<'a>(&self, term: impl Into<Term<'a>>) -> Option<ObjectIdentifier> {
        let term = term.into();
        let entries = self.read();
        let found = entries
            .iter()
            .find(|(key, value)| {
                value.equal(term.clone()) || term.text().map_or(false, |text| eq_fold(key, text))
            })
            .map(|(key, value)| {
                debug!("Found {:?} under {}", term, key);
                value.clone()
            });
        found
    }

    pub fn exists<'a>(&self, term: impl Into<Term<'a>>) -> bool {
        self.get(term).is_some()
    }

    pub fn remove(&self, key: &str) -> Option<ObjectIdentifier> {
        self.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, ObjectIdentifier)> for ObjectIdentifierMap {
    fn from_iter<T: IntoIterator<Item = (K, ObjectIdentifier)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}
