//! Words with no distinct plural form.

use crate::inflections::InflectionError;
use crate::pattern::{Pattern, escape};
use std::cmp::Reverse;

#[derive(Debug, Clone)]
struct UncountableEntry {
    len: Reverse<usize>,
    key: String,
    /// `\b(?i:word)$`: matches the word itself or the last token of a phrase.
    pattern: Pattern,
}

/// Uncountable words, longest first.
#[derive(Debug, Clone, Default)]
pub struct UncountableSet {
    entries: Vec<UncountableEntry>,
}

impl UncountableSet {
    pub fn insert(&mut self, word: &str) -> Result<(), InflectionError> {
        let pattern = Pattern::new(&format!(r"\b(?i:{})$", escape(word)))?;
        self.entries.push(UncountableEntry {
            len: Reverse(word.chars().count()),
            key: word.to_lowercase(),
            pattern,
        });
        self.entries
            .sort_by(|a, b| a.len.cmp(&b.len).then_with(|| a.key.cmp(&b.key)));
        Ok(())
    }

    /// Drop `word` if it is listed with exactly this length and spelling.
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, word: &str) -> bool {
        let key = word.to_lowercase();
        let len = word.chars().count();
        for (idx, entry) in self.entries.iter().enumerate() {
            let Reverse(entry_len) = entry.len;
            if len < entry_len {
                continue;
            }
            if entry_len < len {
                return false;
            }
            if entry.key == key {
                self.entries.remove(idx);
                return true;
            }
        }
        false
    }

    /// Whether any uncountable word closes `word` on a word boundary.
    pub fn matches(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.pattern.is_match(word))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowercase spellings, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}
