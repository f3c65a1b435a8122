//! Number inflection and the identifiers derived from it.

use crate::inflections::Inflections;
use crate::transform::path::demodulize;

impl Inflections {
    pub fn pluralize(&self, word: &str) -> String {
        self.apply(word, self.plurals(), true)
    }

    pub fn singularize(&self, word: &str) -> String {
        self.apply(word, self.singulars(), true)
    }

    /// `RawScaledScorer` to `raw_scaled_scorers`.
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&self.underscore(class_name))
    }

    /// `raw_scaled_scorers` to `RawScaledScorer`; anything up to the last
    /// `.` is a schema prefix and is dropped.
    pub fn classify(&self, table_name: &str) -> String {
        let table = match memchr::memrchr(b'.', table_name.as_bytes()) {
            Some(idx) => &table_name[idx + 1..],
            None => table_name,
        };
        self.camelize(&self.singularize(table), true)
    }

    /// `NameSpace.Model` to `model_id` (or `modelid`).
    pub fn foreign_key(&self, class_name: &str, separate_with_underscore: bool) -> String {
        let mut key = self.underscore(demodulize(class_name, "."));
        if separate_with_underscore {
            key.push('_');
        }
        key.push_str("id");
        key
    }
}
