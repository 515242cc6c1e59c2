//! Ordered collection types sharing one query API.
//!
//! # Purpose
//! Every container here implements [`Collection`], which provides membership tests, functional
//! transforms (`filter`, `every`, `some`) and the search family (`search`, `find`, `find_last`,
//! `find_all`) on top of a handful of storage primitives. List-like containers additionally
//! implement [`List`] for positional access, sorting and splicing.
//!
//! Each search comes in two shapes: a plain predicate (`find`) and a predicate that also receives a
//! query value (`find_by_query`), which lets one predicate be reused for different needles.
//!
//! # Method
//! All containers keep their contents in contiguous storage, in insertion order. Lookups that can
//! miss return [`Option`]; the only error is [`IndexOutOfBounds`] when inserting past the end of a
//! list.

mod collection;
mod cursor;
mod error;
pub mod list;
pub mod map;
mod sort;

pub use collection::*;
pub use cursor::*;
pub use error::*;
#[doc(inline)]
pub use list::{ArrayList, List, Queue, Set, Stack};
#[doc(inline)]
pub use map::Map;

mod tests;
