use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A [`ComparableComparator`](super::ComparableComparator) was asked to compare a value that
/// doesn't expose the [`Comparable`](super::Comparable) capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    pub type_name: &'static str,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ComparableComparator can only compare values implementing Comparable, got {}!",
            self.type_name
        )
    }
}

impl Error for InvalidArgument {}

/// A pluralizer entry point was given a value that isn't text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub operation: &'static str,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Argument 1 passed to {}() must be of the type string!", self.operation)
    }
}

impl Error for TypeMismatch {}
