//! Naming-convention transforms: camel case, underscores, human text, titles.

use crate::inflections::Inflections;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static LEADING_LOWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z\d]*").expect("static regex failed to compile – this is a bug")
});
static HUMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:_|(/))([a-z\d]*)").expect("static regex failed to compile – this is a bug")
});
static UPPER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static regex failed to compile – this is a bug")
});
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z\d])([A-Z])").expect("static regex failed to compile – this is a bug")
});
static WORDISH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z\d]+").expect("static regex failed to compile – this is a bug")
});
static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z]").expect("static regex failed to compile – this is a bug")
});

/// Uppercase the first character if it is a word character.
pub fn upcase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_word_char(first) => first.to_uppercase().chain(chars).collect(),
        _ => text.to_owned(),
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Inflections {
    fn capitalize_or_acronym(&self, word: &str) -> String {
        match self.lookup_acronym(word) {
            Some(acronym) => acronym.to_owned(),
            None => capitalize(word),
        }
    }

    /// `device_type` to `DeviceType` (or `deviceType`).
    ///
    /// `/` survives as a path separator (`admin/user` to `Admin/User`);
    /// registered acronyms keep their canonical casing.
    pub fn camelize(&self, term: &str, uppercase_first_letter: bool) -> String {
        let head = if uppercase_first_letter {
            LEADING_LOWER
                .replace(term, |caps: &Captures<'_>| self.capitalize_or_acronym(&caps[0]))
                .into_owned()
        } else {
            self.acronyms.downcase_head(term)
        };

        HUMP.replace_all(&head, |caps: &Captures<'_>| {
            let sep = caps.get(1).map_or("", |m| m.as_str());
            format!("{sep}{}", self.capitalize_or_acronym(&caps[2]))
        })
        .into_owned()
    }

    /// `DeviceType` to `device_type`; `-` becomes `_` as well.
    pub fn underscore(&self, term: &str) -> String {
        let word = self.acronyms.split_acronyms(term);
        let word = UPPER_RUN.replace_all(&word, "${1}_${2}");
        let word = LOWER_UPPER.replace_all(&word, "${1}_${2}");
        word.replace('-', "_").to_lowercase()
    }

    /// `employee_salary` to `Employee salary`.
    ///
    /// Human rules run first (uncountables are not consulted), then leading
    /// underscores and a trailing `_id` are dropped.
    pub fn humanize(&self, term: &str, capitalize: bool, keep_id_suffix: bool) -> String {
        let result = self.apply(term, self.humans(), false);
        let mut result = result.trim_start_matches('_');
        if !keep_id_suffix {
            result = result.strip_suffix("_id").unwrap_or(result);
        }
        let result = result.replace('_', " ");
        let result = WORDISH.replace_all(&result, |caps: &Captures<'_>| {
            let lower = caps[0].to_lowercase();
            match self.lookup_acronym(&lower) {
                Some(acronym) => acronym.to_owned(),
                None => lower,
            }
        });
        if capitalize {
            upcase_first(&result)
        } else {
            result.into_owned()
        }
    }

    /// `x-men: the last stand` to `X Men: The Last Stand`.
    ///
    /// Letters following a word character and an apostrophe are left alone,
    /// so `man's` stays `Man's`.
    pub fn titleize(&self, term: &str, keep_id_suffix: bool) -> String {
        let human = self.humanize(&self.underscore(term), true, keep_id_suffix);
        WORD_START
            .replace_all(&human, |caps: &Captures<'_>| {
                let m = caps.get(0).map_or("", |m| m.as_str());
                let start = caps.get(0).map_or(0, |m| m.start());
                if follows_apostrophe(&human[..start]) {
                    m.to_owned()
                } else {
                    m.to_uppercase()
                }
            })
            .into_owned()
    }
}

fn follows_apostrophe(before: &str) -> bool {
    let mut rev = before.chars().rev();
    matches!(
        (rev.next(), rev.next()),
        (Some('\'' | '\u{2019}' | '`'), Some(c)) if is_word_char(c)
    )
}
