//! Separator-level rewrites. No rules involved.

use memchr::memmem;

/// `puni_puni` to `puni-puni`.
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// Everything after the last `separator`, or the whole input without one.
pub fn demodulize<'a>(path: &'a str, separator: &str) -> &'a str {
    match memmem::rfind(path.as_bytes(), separator.as_bytes()) {
        Some(idx) => &path[idx + separator.len()..],
        None => path,
    }
}

/// Everything before the last `separator`, or `""` without one.
pub fn deconstantize<'a>(path: &'a str, separator: &str) -> &'a str {
    match memmem::rfind(path.as_bytes(), separator.as_bytes()) {
        Some(idx) => &path[..idx],
        None => "",
    }
}
