pub mod acronym;
pub mod inflect;
pub mod inflections;
pub mod locale;
pub mod pattern;
pub mod registry;
pub mod rules;
pub mod transform;
pub mod uncountable;

pub use inflect::{
    camelize, classify, foreign_key, humanize, pluralize, singularize, tableize, titleize,
    underscore,
};
pub use inflections::{InflectionError, Inflections, Scope};
pub use locale::{DEFAULT_LOCALE, EN_US};
pub use pattern::{Pattern, Rule};
pub use registry::{Configure, configure, instance};
pub use transform::{
    dasherize, deconstantize, demodulize, ordinal, ordinalize, parameterize, transliterate,
    upcase_first,
};

#[cfg(test)]
mod testing;
