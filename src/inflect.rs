//! Top-level transforms backed by the process-wide registries.
//!
//! Each function takes an optional locale; `None` resolves to the
//! environment's default (see [`crate::locale`]).

use crate::registry::instance;

pub fn pluralize(word: &str, locale: Option<&str>) -> String {
    instance(locale).read().pluralize(word)
}

pub fn singularize(word: &str, locale: Option<&str>) -> String {
    instance(locale).read().singularize(word)
}

pub fn camelize(term: &str, uppercase_first_letter: bool, locale: Option<&str>) -> String {
    instance(locale).read().camelize(term, uppercase_first_letter)
}

pub fn underscore(term: &str, locale: Option<&str>) -> String {
    instance(locale).read().underscore(term)
}

pub fn humanize(
    term: &str,
    capitalize: bool,
    keep_id_suffix: bool,
    locale: Option<&str>,
) -> String {
    instance(locale)
        .read()
        .humanize(term, capitalize, keep_id_suffix)
}

pub fn titleize(term: &str, keep_id_suffix: bool, locale: Option<&str>) -> String {
    instance(locale).read().titleize(term, keep_id_suffix)
}

pub fn tableize(class_name: &str, locale: Option<&str>) -> String {
    instance(locale).read().tableize(class_name)
}

pub fn classify(table_name: &str, locale: Option<&str>) -> String {
    instance(locale).read().classify(table_name)
}

pub fn foreign_key(
    class_name: &str,
    separate_with_underscore: bool,
    locale: Option<&str>,
) -> String {
    instance(locale)
        .read()
        .foreign_key(class_name, separate_with_underscore)
}
