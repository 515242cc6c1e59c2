//! Small extensions to the language: ordered collections with a shared query API, comparators and
//! an English pluralizer.
//!
//! # Purpose
//! Rust's own containers are deliberately minimal. This crate wraps them in types that carry a
//! richer, uniform API: every container can be searched, filtered, mapped and iterated in the same
//! way, and list-like containers can be sorted with whichever ordering the caller has at hand.
//!
//! # Method
//! All containers are backed by contiguous storage and keep insertion order. The shared behaviour
//! lives in provided methods on the [`Collection`](collections::Collection) and
//! [`List`](collections::List) traits, so each concrete type only supplies its storage and its own
//! insertion rules (a [`Set`](collections::Set) rejects duplicates, a
//! [`Queue`](collections::Queue) polls from the head, and so on).
//!
//! Ordering is passed explicitly through [`Order`](lang::Order), which is either a raw comparison
//! function, a [`Comparator`](lang::Comparator) object or the type's natural [`Ord`].
//!
//! # Error Handling
//! "Not found" is never an error here: lookups return [`Option`]. The few real failures are
//! strongly typed structs that implement [`Error`](std::error::Error), collected in [`Error`] for
//! callers that want a single type:
//! - [`IndexOutOfBounds`](collections::IndexOutOfBounds) when inserting past the end of a list.
//! - [`InvalidArgument`](lang::InvalidArgument) when a
//!   [`ComparableComparator`](lang::ComparableComparator) meets a value that can't order itself.
//! - [`TypeMismatch`](lang::TypeMismatch) when the pluralizer is handed something that isn't text.
//!
//! # Features
//! - `collections`: the container types.
//! - `pluralizer`: the regex based [`EnglishPluralizer`](lang::text::EnglishPluralizer) and the
//!   plural helpers on [`Text`](lang::text::Text).
//!
//! Both are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod lang;

mod error;
pub(crate) mod util;

pub use error::*;
