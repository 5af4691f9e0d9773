//! Dictionary of canonicalized special street names

use crate::error::{DividerError, Result};
use crate::normalize::canonicalize;
use std::collections::BTreeSet;

/// Set of canonical keys of streets whose name carries a number.
///
/// Keys are kept in a `BTreeSet<String>`, so iteration follows plain
/// codepoint order regardless of platform or locale. There is no mutation
/// API: a different word list means a new dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    keys: BTreeSet<String>,
    /// Length in chars of the longest key
    max_key_chars: usize,
}

impl Dictionary {
    /// Builds a dictionary from raw street names.
    ///
    /// Duplicates and spelling variants that share a canonical key collapse
    /// into one entry. Entries without any letter or digit are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            let key = canonicalize(word);
            if key.is_empty() {
                tracing::warn!(entry = word, "skipping street entry without letters or digits");
                continue;
            }
            keys.insert(key);
        }
        tracing::debug!(entries = keys.len(), "built street dictionary");

        Self::from_keys(keys)
    }

    /// Like [`Dictionary::new`], but rejects entries that canonicalize to
    /// nothing instead of skipping them.
    ///
    /// `line` in the error is the zero-based position of the entry.
    pub fn try_new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = BTreeSet::new();
        for (line, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            let key = canonicalize(word);
            if key.is_empty() {
                return Err(DividerError::InvalidEntry {
                    line,
                    entry: word.to_string(),
                });
            }
            keys.insert(key);
        }
        tracing::debug!(entries = keys.len(), "built street dictionary");

        Ok(Self::from_keys(keys))
    }

    fn from_keys(keys: BTreeSet<String>) -> Self {
        let max_key_chars = keys.iter().map(|key| key.chars().count()).max().unwrap_or(0);
        Self {
            keys,
            max_key_chars,
        }
    }

    /// Exact membership test for an already canonical key.
    pub fn contains(&self, canonical_key: &str) -> bool {
        self.keys.contains(canonical_key)
    }

    /// Canonicalizes `street` and tests membership.
    pub fn contains_street(&self, street: &str) -> bool {
        self.contains(&canonicalize(street))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Length in chars of the longest canonical key, 0 when empty.
    ///
    /// No text whose canonical form is longer can be a member.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Canonical keys in codepoint order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
