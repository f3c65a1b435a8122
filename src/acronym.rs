//! Acronym table.
//!
//! Entries are kept sorted by descending length, then lowercase spelling, so
//! a lookup can stop as soon as it reaches entries shorter than the query.
//! The regex alternation built from the table (and the two case-transform
//! patterns derived from it) is memoized and dropped on every write.

use crate::pattern::{Pattern, escape};
use smallvec::SmallVec;
use std::cmp::Reverse;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct AcronymEntry {
    len: Reverse<usize>,
    key: String,
    word: String,
}

/// Patterns derived from the current acronym set.
#[derive(Debug)]
pub(crate) struct AcronymPatterns {
    alternation: String,
    /// Leading acronym (or single word character) of a lower-camel head.
    camelize: Pattern,
    /// Acronym occurrence that `underscore` splits off.
    underscore: Pattern,
}

#[derive(Debug, Default)]
pub struct AcronymTable {
    entries: Vec<AcronymEntry>,
    patterns: OnceLock<Option<AcronymPatterns>>,
}

impl Clone for AcronymTable {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            patterns: OnceLock::new(),
        }
    }
}

impl AcronymTable {
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.entries.push(AcronymEntry {
            len: Reverse(word.chars().count()),
            key: word.to_lowercase(),
            word: word.to_owned(),
        });
        self.entries.sort();
        self.patterns.take();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.patterns.take();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical spellings in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Canonical form of `term` if it is a registered acronym (case-insensitive).
    pub fn lookup(&self, term: &str) -> Option<&str> {
        let key = term.to_lowercase();
        let len = key.chars().count();
        for entry in &self.entries {
            let Reverse(entry_len) = entry.len;
            if len < entry_len {
                continue;
            }
            if entry_len < len {
                return None;
            }
            if entry.key == key {
                return Some(&entry.word);
            }
        }
        None
    }

    /// The alternation of every canonical spelling, longest first.
    pub fn pattern(&self) -> Option<&str> {
        self.patterns().map(|p| p.alternation.as_str())
    }

    /// Head-of-term pattern `camelize` lowercases when the first letter stays lower.
    pub fn camelize_pattern(&self) -> Option<&str> {
        self.patterns().map(|p| p.camelize.as_str())
    }

    /// Boundary pattern whose matches `underscore` splits off.
    pub fn underscore_pattern(&self) -> Option<&str> {
        self.patterns().map(|p| p.underscore.as_str())
    }

    pub(crate) fn patterns(&self) -> Option<&AcronymPatterns> {
        self.patterns.get_or_init(|| self.build_patterns()).as_ref()
    }

    fn build_patterns(&self) -> Option<AcronymPatterns> {
        let alternation = if self.entries.is_empty() {
            // never matches
            "(?=a)b".to_owned()
        } else {
            let escaped: SmallVec<[String; 64]> =
                self.entries.iter().map(|e| escape(&e.word)).collect();
            format!("(?:{})", escaped.join("|"))
        };
        tracing::debug!(acronyms = self.entries.len(), "building acronym patterns");

        let camelize = Pattern::new(&format!(r"\A(?:{alternation}(?=\b|[A-Z_])|\w)"));
        let underscore = Pattern::new(&format!(
            r"(?:(?<=[A-Za-z\d])|\b)({alternation})(?=\b|[^a-z])"
        ));
        match (camelize, underscore) {
            (Ok(camelize), Ok(underscore)) => Some(AcronymPatterns {
                alternation,
                camelize,
                underscore,
            }),
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(%err, "acronym patterns failed to compile; acronyms ignored");
                None
            }
        }
    }

    /// Lowercase the head of a camel-cased term: a leading acronym as a whole,
    /// otherwise just the first word character.
    pub(crate) fn downcase_head(&self, term: &str) -> String {
        match self.patterns() {
            Some(p) => {
                let mut done = false;
                p.camelize.replace_all_with(term, |m, _| {
                    if done {
                        return m.to_owned();
                    }
                    done = true;
                    m.to_lowercase()
                })
            }
            None => {
                let mut chars = term.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    /// Replace every registered acronym in `term` with `_` and its lowercase
    /// spelling. Acronyms at the start of a word keep the `_` as well.
    pub(crate) fn split_acronyms(&self, term: &str) -> String {
        let Some(p) = self.patterns() else {
            return term.to_owned();
        };
        p.underscore
            .replace_all_with(term, |m, _| format!("_{}", m.to_lowercase()))
    }
}
