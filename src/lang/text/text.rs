use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::Deref;

use derive_more::{Display, From};

#[cfg(feature = "pluralizer")]
use super::{EnglishPluralizer, Pluralizer};
use crate::lang::{AsComparable, Comparable};

/// An owned, immutable piece of text.
///
/// `Text` is a thin wrapper around [`String`] that plugs into the rest of the crate: it is
/// [`Comparable`], it is what [`List::join`](crate::collections::List::join) produces, and with the
/// `pluralizer` feature it can inflect itself as an English noun.
///
/// Text derefs to [`str`], so all of the usual string slice methods are available.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Text {
        Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns a copy with the first character in uppercase.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::lang::text::Text;
    /// assert_eq!(Text::from("élan").to_uppercase_first(), "Élan");
    /// assert_eq!(Text::default().to_uppercase_first(), "");
    /// ```
    pub fn to_uppercase_first(&self) -> Text {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => Text(first.to_uppercase().chain(chars).collect()),
            None => Text::default(),
        }
    }
}

#[cfg(feature = "pluralizer")]
impl Text {
    /// Returns the English plural form of this text, see [`EnglishPluralizer`].
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::lang::text::Text;
    /// assert_eq!(Text::from("Tooth").to_plural(), "Teeth");
    /// ```
    pub fn to_plural(&self) -> Text {
        Text(EnglishPluralizer::new().plural_form(&self.0))
    }

    /// Returns the English singular form of this text, see [`EnglishPluralizer`].
    pub fn to_singular(&self) -> Text {
        Text(EnglishPluralizer::new().singular_form(&self.0))
    }

    pub fn is_plural(&self) -> bool {
        EnglishPluralizer::new().is_plural(&self.0)
    }

    pub fn is_singular(&self) -> bool {
        EnglishPluralizer::new().is_singular(&self.0)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_owned())
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Comparable for Text {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl AsComparable for Text {
    fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
        Some(self)
    }
}
