use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index lies past the end of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} is out of bounds for a list of {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}
