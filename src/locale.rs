//! Default locale resolution.
//!
//! The locale is only ever used as a registry key, so it is kept as a plain
//! string. When a caller does not name one, it is read from the environment
//! on every call.

use std::env;

pub const EN_US: &str = "en_US";

/// Used when the environment names no locale, or only `C`/`POSIX`.
pub const DEFAULT_LOCALE: &str = EN_US;

/// Crate-specific override, consulted before the POSIX variables.
pub const LOCALE_ENV: &str = "INFLECTO_LOCALE";

const POSIX_ENV: [&str; 4] = ["LC_ALL", "LC_CTYPE", "LANG", "LANGUAGE"];

/// `locale` itself, or the environment's default when `None`.
pub fn resolve(locale: Option<&str>) -> String {
    match locale {
        Some(locale) => locale.to_owned(),
        None => default_locale(),
    }
}

pub fn default_locale() -> String {
    let found = [LOCALE_ENV]
        .into_iter()
        .chain(POSIX_ENV)
        .find_map(|var| env::var(var).ok().filter(|v| !v.trim().is_empty()));
    found
        .as_deref()
        .and_then(parse_posix_locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
}

/// Reduce a POSIX locale value to its `language_TERRITORY` part.
///
/// `"en_GB.UTF-8@euro"` becomes `"en_GB"`; `LANGUAGE`-style lists keep their
/// first entry. `C` and `POSIX` carry no language and yield `None`.
pub fn parse_posix_locale(value: &str) -> Option<String> {
    let first = value.split(':').next()?.trim();
    let name = first.split(['.', '@']).next()?;
    match name {
        "" | "C" | "POSIX" => None,
        name => Some(name.to_owned()),
    }
}
