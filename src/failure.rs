//! The Failure and Result types of this library.
//!
//! Any method which addresses an element by index, or which depends on the configuration
//! being valid, may fail. The cause of the error is then represented as a `Failure`.
//!
//! Faillible methods come in two versions where both make sense:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.

use std::result;

use thiserror::Error;

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Error, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// An argument was rejected: zero segment budget, budget too small for one element, non-prime table size...
    #[error("invalid argument: {name}")]
    InvalidArgument { name: &'static str },
    /// The index does not address an element.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// The operation is not supported by this collection.
    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },
    /// No larger table size can be found.
    #[error("capacity exhausted")]
    CapacityExhausted,
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cold]
#[inline(never)]
pub(crate) fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}
