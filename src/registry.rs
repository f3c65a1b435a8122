//! Process-wide registries, one per locale.
//!
//! Registries are created lazily on first request and live for the rest of
//! the process. English locales are seeded with the bundled rules when they
//! are created; other locales start empty.
//!
//! The expected pattern is to register custom rules once at startup through
//! [`configure`] and only read afterwards. Reads take a shared lock, so any
//! number of threads can inflect concurrently.

use crate::inflections::Inflections;
use crate::locale;
use crate::rules::is_english;
use parking_lot::{ArcRwLockWriteGuard, RawRwLock, RwLock};
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, LazyLock};

pub type SharedInflections = Arc<RwLock<Inflections>>;

static REGISTRIES: LazyLock<RwLock<HashMap<String, SharedInflections>>> =
    LazyLock::new(Default::default);

/// The registry for `locale` (or the default locale), created on first use.
pub fn instance(locale: Option<&str>) -> SharedInflections {
    let locale = locale::resolve(locale);
    if let Some(found) = REGISTRIES.read().get(&locale) {
        return Arc::clone(found);
    }

    let mut registries = REGISTRIES.write();
    let entry = registries.entry(locale).or_insert_with_key(|locale| {
        let seeded = is_english(locale);
        tracing::debug!(locale = %locale, seeded, "creating inflection registry");
        let inflections = if seeded {
            Inflections::english(locale.as_str())
        } else {
            Inflections::new(locale.as_str())
        };
        Arc::new(RwLock::new(inflections))
    });
    Arc::clone(entry)
}

/// Begin configuring the registry for `locale`.
///
/// The handle holds the registry's write lock until it is dropped. Calling a
/// top-level transform for the same locale on the same thread while holding
/// it will deadlock.
pub fn configure(locale: Option<&str>) -> Configure {
    Configure {
        guard: instance(locale).write_arc(),
    }
}

/// Exclusive handle on one locale's registry.
pub struct Configure {
    guard: ArcRwLockWriteGuard<RawRwLock, Inflections>,
}

impl Deref for Configure {
    type Target = Inflections;

    fn deref(&self) -> &Inflections {
        &self.guard
    }
}

impl DerefMut for Configure {
    fn deref_mut(&mut self) -> &mut Inflections {
        &mut self.guard
    }
}
