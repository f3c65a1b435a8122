//! String transforms.
//!
//! Rule-driven transforms are methods on [`Inflections`](crate::Inflections)
//! and live in `case` and `noun`. The purely syntactic ones need no registry
//! and are plain functions.

pub mod case;
pub mod noun;
pub mod ordinal;
pub mod path;
pub mod text;

pub use case::upcase_first;
pub use ordinal::{ordinal, ordinalize};
pub use path::{dasherize, deconstantize, demodulize};
pub use text::{parameterize, transliterate};
