//! ASCII folding and URL slugs.

use icu_normalizer::DecomposingNormalizerBorrowed;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^a-z0-9_-]+").expect("static regex failed to compile – this is a bug")
});

/// Compatibility-decompose `text` and keep only the ASCII part.
///
/// Diacritics fall away (`älämölö` to `alamolo`); characters with no ASCII
/// decomposition are dropped outright (`Ærøskøbing` to `rskbing`).
pub fn transliterate(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let decomposed = ICU4X_NFKD.normalize(text);
    Cow::Owned(decomposed.chars().filter(char::is_ascii).collect())
}

/// Turn `text` into a URL-safe slug.
///
/// Every run of characters outside `[a-z0-9_-]` (ignoring case) becomes
/// `separator`. With a non-empty separator, repeated separators collapse and
/// one leading and one trailing separator are trimmed.
pub fn parameterize(text: &str, separator: &str, preserve_case: bool) -> String {
    let ascii = transliterate(text);
    let mut slug = NON_SLUG.replace_all(&ascii, NoExpand(separator)).into_owned();

    if !separator.is_empty() {
        let doubled = separator.repeat(2);
        while slug.contains(&doubled) {
            slug = slug.replace(&doubled, separator);
        }
        if let Some(rest) = slug.strip_prefix(separator) {
            slug = rest.to_owned();
        }
        if let Some(rest) = slug.strip_suffix(separator) {
            slug.truncate(rest.len());
        }
    }

    if preserve_case {
        slug
    } else {
        slug.to_lowercase()
    }
}
