//! Error type for fallible screen operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by screen construction and resize.
///
/// Everything else in the crate is infallible: the parser never rejects
/// input, and screen edits are allocation-free.
#[derive(Debug, Error)]
pub enum Error {
    /// The screen backing store could not be allocated.
    #[error("out of memory allocating screen buffers")]
    OutOfMemory,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
