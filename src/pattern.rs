//! Matching engine seam.
//!
//! Every rule, uncountable word and acronym-derived pattern goes through
//! [`Pattern`], so the regex engine behind it can be swapped without touching
//! the registry. `fancy-regex` is used because the acronym-aware case
//! transforms need look-around, which the plain `regex` crate does not offer.

use crate::inflections::InflectionError;
use fancy_regex::{Captures, Expander, Regex};
use std::fmt;

/// A compiled, immutable match pattern.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`. Malformed input is reported here, never at match time.
    pub fn new(pattern: &str) -> Result<Self, InflectionError> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|source| InflectionError::Pattern {
                pattern: pattern.to_owned(),
                source: Box::new(source),
            })
    }

    /// The source text the pattern was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self.regex.is_match(text) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(pattern = self.as_str(), %err, "pattern failed while matching");
                false
            }
        }
    }

    /// Rewrite the first match of the pattern in `text` with `template`
    /// (`$1` / `${name}` backreferences, `$$` for a literal dollar).
    ///
    /// Returns `None` when nothing matched, even if the rewrite would have
    /// been a no-op.
    pub fn replace_first(&self, text: &str, template: &str) -> Option<String> {
        let caps = self.captures(text)?;
        let whole = caps.get(0)?;

        let mut out = String::with_capacity(text.len() + template.len());
        out.push_str(&text[..whole.start()]);
        Expander::default().append_expansion(&mut out, template, &caps);
        out.push_str(&text[whole.end()..]);
        Some(out)
    }

    /// Replace every match of the pattern with the output of `f`.
    ///
    /// `f` receives the matched text and the byte offset it starts at.
    pub(crate) fn replace_all_with<F>(&self, text: &str, mut f: F) -> String
    where
        F: FnMut(&str, usize) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for found in self.regex.find_iter(text) {
            let m = match found {
                Ok(m) => m,
                Err(err) => {
                    tracing::warn!(pattern = self.as_str(), %err, "pattern failed while matching");
                    break;
                }
            };
            out.push_str(&text[last..m.start()]);
            out.push_str(&f(m.as_str(), m.start()));
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }

    fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        match self.regex.captures(text) {
            Ok(caps) => caps,
            Err(err) => {
                tracing::warn!(pattern = self.as_str(), %err, "pattern failed while matching");
                None
            }
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

/// Escape `text` so it is matched literally.
#[inline]
pub fn escape(text: &str) -> String {
    regex::escape(text)
}

/// Escape `text` so it is emitted literally by a replacement template.
#[inline]
pub fn escape_template(text: &str) -> String {
    text.replace('$', "$$")
}

/// A pattern paired with its replacement template.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, InflectionError> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
            replacement: replacement.to_owned(),
        })
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// `Some(rewritten)` if the rule matched `word`, `None` otherwise.
    #[inline]
    pub fn apply(&self, word: &str) -> Option<String> {
        self.pattern.replace_first(word, &self.replacement)
    }
}
