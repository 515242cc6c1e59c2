//! Ordering primitives and text utilities that the rest of the crate builds on.
//!
//! The ordering side follows a simple split:
//! - [`Comparable`] is implemented by values that know how to order themselves against another
//!   value, and [`AsComparable`] lets code ask a value for that capability at runtime.
//! - [`Comparator`] is implemented by objects that order two values from the outside, such as
//!   [`ComparableComparator`] and [`StringComparator`].
//! - [`Order`] picks one of the above (or a plain closure, or [`Ord`]) for a sort.

mod comparable;
mod comparator;
mod error;
mod order;
pub mod text;

pub use comparable::*;
pub use comparator::*;
pub use error::*;
pub use order::*;
