use derive_more::{Display, Error, From, IsVariant, TryInto};

#[cfg(feature = "collections")]
use crate::collections::IndexOutOfBounds;
use crate::lang::{InvalidArgument, TypeMismatch};

/// Any error produced by this crate.
///
/// Each operation returns its own, more specific error type. This enum exists for callers that
/// combine several of them and want to propagate with `?` into a single type.
#[derive(Debug, Display, Clone, Error, From, TryInto, IsVariant)]
pub enum Error {
    #[cfg(feature = "collections")]
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidArgument(InvalidArgument),
    TypeMismatch(TypeMismatch),
}
