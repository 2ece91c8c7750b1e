//! Translation catalogs.
//!
//! A catalog maps each translatable text (the catalog key) to its
//! translations, keyed by language code:
//!
//! ```json
//! {
//!     "Hello": { "es": "Hola", "fr": "MISSING TRANSLATION" }
//! }
//! ```
//!
//! # Invariants
//!
//! 1. **Additive**: stamping and merging only ever add keys and languages.
//! 2. **Existing values win**: a value already present for a (key, language)
//!    pair is never replaced, so a placeholder cannot clobber a translation.

pub mod store;

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::core::extract::Finding;
use crate::core::messages::ToolMessages;

/// Translations of one key, by language code.
pub type CatalogEntry = BTreeMap<String, String>;

/// Mapping from catalog key to its translations.
///
/// Keys are kept sorted so the persisted file is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

/// What [`Catalog::absorb`] added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that did not exist before.
    pub added_keys: usize,
    /// (key, language) values that did not exist before.
    pub added_values: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, CatalogEntry> {
        self.entries.iter()
    }

    /// Set a single translation, replacing any previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        language: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(language.into(), value.into());
    }

    /// Catalog key for a finding: the literal itself, or a diagnostic key
    /// naming the raw argument so the call site can be found and fixed.
    pub fn key_for(finding: &Finding, messages: &ToolMessages) -> String {
        match finding {
            Finding::Literal(text) => text.clone(),
            Finding::NonLiteral(raw) => messages.variable_input(raw),
        }
    }

    /// Ensure `key` has an entry and stamp `placeholder` for every language
    /// in `languages` that has no value yet.
    ///
    /// Languages not listed are left alone. Returns how many values were
    /// stamped.
    pub fn stamp(&mut self, key: &str, languages: &[String], placeholder: &str) -> usize {
        let entry = self.entries.entry(key.to_string()).or_default();

        let mut stamped = 0;
        for language in languages {
            if !entry.contains_key(language) {
                entry.insert(language.clone(), placeholder.to_string());
                stamped += 1;
            }
        }
        stamped
    }

    /// Build a fresh fragment from a set of findings.
    pub fn build<'a>(
        findings: impl IntoIterator<Item = &'a Finding>,
        languages: &[String],
        messages: &ToolMessages,
    ) -> Self {
        let mut fragment = Self::new();
        for finding in findings {
            let key = Self::key_for(finding, messages);
            fragment.stamp(&key, languages, messages.placeholder);
        }
        fragment
    }

    /// Merge `fresh` into `self`; values already in `self` win.
    pub fn absorb(&mut self, fresh: Catalog) -> MergeStats {
        let mut stats = MergeStats::default();

        for (key, fresh_entry) in fresh.entries {
            let entry = match self.entries.entry(key) {
                btree_map::Entry::Occupied(occupied) => occupied.into_mut(),
                btree_map::Entry::Vacant(vacant) => {
                    stats.added_keys += 1;
                    vacant.insert(CatalogEntry::new())
                }
            };

            for (language, value) in fresh_entry {
                if let btree_map::Entry::Vacant(vacant) = entry.entry(language) {
                    vacant.insert(value);
                    stats.added_values += 1;
                }
            }
        }

        stats
    }

    /// Number of values equal to `placeholder`.
    pub fn missing_count(&self, placeholder: &str) -> usize {
        self.entries
            .values()
            .flat_map(|entry| entry.values())
            .filter(|value| value.as_str() == placeholder)
            .count()
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a String, &'a CatalogEntry);
    type IntoIter = btree_map::Iter<'a, String, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Combine a persisted catalog with a freshly built fragment.
///
/// Every key and language of either side is kept. When both sides have a
/// value for the same (key, language), `existing` wins.
pub fn merge(existing: Catalog, fresh: Catalog) -> Catalog {
    let mut merged = existing;
    merged.absorb(fresh);
    merged
}
