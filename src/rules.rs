//! Bundled rule sets.
//!
//! Only English ships with the crate. Any locale whose language subtag is
//! `en` is seeded with it when its registry is first created.

pub mod english;

/// Whether `locale` names an English variant (`en`, `en_US`, `en-GB`, ...).
pub fn is_english(locale: &str) -> bool {
    locale
        .split(['_', '-', '.', '@'])
        .next()
        .is_some_and(|lang| lang.eq_ignore_ascii_case("en"))
}
