//! Helpers for the few places where this crate panics instead of returning a [`Result`].

use std::error::Error;

/// Escalates an error into a panic that carries the error's own message.
pub(crate) trait Throw<T> {
    /// Returns the contained value, or panics with the [`Display`](std::fmt::Display) output of
    /// the error.
    ///
    /// # Panics
    /// Panics if `self` is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Asserts that the block panics and, optionally, that the panic message contains `$needle`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $needle:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($needle),
                    "panic message {message:?} should contain {:?}",
                    $needle
                );
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
