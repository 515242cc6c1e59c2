//! Text handling: the [`Text`] wrapper and word inflection.
//!
//! [`Pluralizer`] describes conversion between the singular and plural form of a word.
//! [`EnglishPluralizer`] implements it with ordered suffix rules and is only available with the
//! `pluralizer` feature.

#[cfg(feature = "pluralizer")]
mod english;
mod pluralizer;
mod text;

#[cfg(feature = "pluralizer")]
pub use english::*;
pub use pluralizer::*;
pub use text::*;
