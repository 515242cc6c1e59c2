//! An insertion-ordered key-value [`Map`].

mod iter;
mod map;

pub use iter::*;
pub use map::*;
