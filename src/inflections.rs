//! The inflection registry.
//!
//! An [`Inflections`] value owns every rule list of one locale. New rules are
//! put in front of the old ones, so whatever is registered last is tried
//! first. Rule application stops at the first pattern that matches.

use crate::acronym::AcronymTable;
use crate::pattern::{Rule, escape, escape_template};
use crate::uncountable::UncountableSet;
use phf::{Map, phf_map};
use std::collections::VecDeque;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InflectionError {
    #[error("invalid scope `{0}`; expected one of acronyms, humans, plurals, singulars, uncountables, all")]
    InvalidScope(String),

    #[error("invalid inflection pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("irregular inflections need a non-empty singular and plural")]
    EmptyIrregular,
}

/// One of the registry's lists, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Acronyms,
    Humans,
    Plurals,
    Singulars,
    Uncountables,
    All,
}

static SCOPES: Map<&'static str, Scope> = phf_map! {
    "acronyms" => Scope::Acronyms,
    "humans" => Scope::Humans,
    "plurals" => Scope::Plurals,
    "singulars" => Scope::Singulars,
    "uncountables" => Scope::Uncountables,
    "all" => Scope::All,
};

impl FromStr for Scope {
    type Err = InflectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SCOPES
            .get(s)
            .copied()
            .ok_or_else(|| InflectionError::InvalidScope(s.to_owned()))
    }
}

pub type Rules = VecDeque<Rule>;

#[derive(Debug, Clone, Default)]
pub struct Inflections {
    locale: String,
    pub(crate) acronyms: AcronymTable,
    humans: Rules,
    plurals: Rules,
    singulars: Rules,
    uncountables: UncountableSet,
}

impl Inflections {
    /// An empty registry for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// A registry for `locale` preloaded with the bundled English rules.
    pub fn english(locale: impl Into<String>) -> Self {
        let mut inflections = Self::new(locale);
        crate::rules::english::seed(&mut inflections)
            .expect("bundled English rules failed to compile – this is a bug");
        inflections
    }

    #[inline]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    // ──────────────────────────────────────────────────────────────
    //  Registration
    // ──────────────────────────────────────────────────────────────

    pub fn clear(&mut self, scope: Scope) -> &mut Self {
        match scope {
            Scope::Acronyms => self.acronyms.clear(),
            Scope::Humans => self.humans.clear(),
            Scope::Plurals => self.plurals.clear(),
            Scope::Singulars => self.singulars.clear(),
            Scope::Uncountables => self.uncountables.clear(),
            Scope::All => {
                self.acronyms.clear();
                self.humans.clear();
                self.plurals.clear();
                self.singulars.clear();
                self.uncountables.clear();
            }
        }
        tracing::debug!(locale = %self.locale, ?scope, "cleared inflection scope");
        self
    }

    /// [`clear`](Self::clear) by scope name; unknown names are rejected
    /// before anything is touched.
    pub fn clear_named(&mut self, scope: &str) -> Result<&mut Self, InflectionError> {
        let scope = scope.parse()?;
        Ok(self.clear(scope))
    }

    /// Add a pluralization rule, tried before every existing one.
    pub fn plural(&mut self, pattern: &str, replacement: &str) -> Result<&mut Self, InflectionError> {
        let rule = Rule::new(pattern, replacement)?;
        self.countable(pattern);
        self.countable(replacement);
        tracing::trace!(locale = %self.locale, pattern, replacement, "plural rule");
        self.plurals.push_front(rule);
        Ok(self)
    }

    /// Add a singularization rule, tried before every existing one.
    pub fn singular(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<&mut Self, InflectionError> {
        let rule = Rule::new(pattern, replacement)?;
        self.countable(pattern);
        self.countable(replacement);
        tracing::trace!(locale = %self.locale, pattern, replacement, "singular rule");
        self.singulars.push_front(rule);
        Ok(self)
    }

    /// Add a humanize rule, tried before every existing one.
    pub fn human(&mut self, pattern: &str, replacement: &str) -> Result<&mut Self, InflectionError> {
        let rule = Rule::new(pattern, replacement)?;
        tracing::trace!(locale = %self.locale, pattern, replacement, "human rule");
        self.humans.push_front(rule);
        Ok(self)
    }

    pub fn acronym<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            tracing::trace!(locale = %self.locale, word, "acronym");
            self.acronyms.insert(word);
        }
        self
    }

    /// Register a singular/plural pair that no suffix rule can express.
    ///
    /// Pairs sharing a first letter get one case-preserving rule per
    /// spelling; others get one rule per spelling and first-letter case.
    pub fn irregular(&mut self, singular: &str, plural: &str) -> Result<&mut Self, InflectionError> {
        let (Some(s0), Some(p0)) = (singular.chars().next(), plural.chars().next()) else {
            return Err(InflectionError::EmptyIrregular);
        };
        self.countable(singular);
        self.countable(plural);

        let stail = &singular[s0.len_utf8()..];
        let ptail = &plural[p0.len_utf8()..];

        if s0.to_uppercase().eq(p0.to_uppercase()) {
            for word in [singular, plural] {
                let (head, tail) = word.split_at(word.chars().next().map_or(0, char::len_utf8));
                let pattern = format!("(?i:({}){}$)", escape(head), escape(tail));
                self.singular(&pattern, &format!("${{1}}{}", escape_template(stail)))?;
                self.plural(&pattern, &format!("${{1}}{}", escape_template(ptail)))?;
            }
        } else {
            let cases: [fn(char) -> String; 2] =
                [|c| c.to_uppercase().collect(), |c| c.to_lowercase().collect()];
            for word in [singular, plural] {
                let Some(x0) = word.chars().next() else {
                    continue;
                };
                let xtail = &word[x0.len_utf8()..];
                for case in cases {
                    let pattern = format!("{}(?i:{})$", escape(&case(x0)), escape(xtail));
                    let to_singular = format!("{}{}", case(s0), stail);
                    let to_plural = format!("{}{}", case(p0), ptail);
                    self.singular(&pattern, &escape_template(&to_singular))?;
                    self.plural(&pattern, &escape_template(&to_plural))?;
                }
            }
        }
        tracing::trace!(locale = %self.locale, singular, plural, "irregular pair");
        Ok(self)
    }

    pub fn uncountable<I, S>(&mut self, words: I) -> Result<&mut Self, InflectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            tracing::trace!(locale = %self.locale, word, "uncountable");
            self.uncountables.insert(word)?;
        }
        Ok(self)
    }

    /// Take `word` out of the uncountable set. Returns whether it was there.
    pub fn countable(&mut self, word: &str) -> bool {
        self.uncountables.remove(word)
    }

    // ──────────────────────────────────────────────────────────────
    //  Lookup
    // ──────────────────────────────────────────────────────────────

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.matches(word)
    }

    pub fn lookup_acronym(&self, term: &str) -> Option<&str> {
        self.acronyms.lookup(term)
    }

    /// Run `word` through `rules`: the first rule that matches wins, even if
    /// its rewrite leaves the word unchanged.
    pub fn apply<'r, R>(&self, word: &str, rules: R, honor_uncountable: bool) -> String
    where
        R: IntoIterator<Item = &'r Rule>,
    {
        if word.is_empty() || (honor_uncountable && self.is_uncountable(word)) {
            return word.to_owned();
        }
        rules
            .into_iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_owned())
    }

    #[inline]
    pub fn plurals(&self) -> &Rules {
        &self.plurals
    }

    #[inline]
    pub fn singulars(&self) -> &Rules {
        &self.singulars
    }

    #[inline]
    pub fn humans(&self) -> &Rules {
        &self.humans
    }

    /// Canonical acronym spellings, longest first.
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.acronyms.iter()
    }

    /// Lowercase uncountable words, longest first.
    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter()
    }

    /// The alternation matching every registered acronym.
    pub fn acronym_pattern(&self) -> Option<&str> {
        self.acronyms.pattern()
    }

    pub fn acronym_camelize_pattern(&self) -> Option<&str> {
        self.acronyms.camelize_pattern()
    }

    pub fn acronym_underscore_pattern(&self) -> Option<&str> {
        self.acronyms.underscore_pattern()
    }
}
