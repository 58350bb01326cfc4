//! Errors raised when an array cannot obtain the capacity it needs.
//!
//! Contract violations (bad indices, bad byte counts) are not errors: they
//! are checked with `debug_assert!` and compiled out of release builds.

use core::panic::Location;

use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A capacity request that could not be satisfied.
///
/// Every variant records the source location of the public call that
/// triggered it. A failed request leaves the array untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("requested capacity too large: {requested} exceeds max size {max_size} (at {location})")]
    RequestedCapacityTooLarge {
        requested: usize,
        max_size: usize,
        location: &'static Location<'static>,
    },

    #[error("out of memory: allocation of {bytes} bytes failed (at {location})")]
    OutOfMemory {
        bytes: usize,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    pub(crate) fn capacity_too_large(requested: usize, max_size: usize) -> Self {
        let location = Location::caller();
        tracing::debug!(requested, max_size, %location, "requested capacity too large");
        Error::RequestedCapacityTooLarge {
            requested,
            max_size,
            location,
        }
    }

    #[track_caller]
    pub(crate) fn out_of_memory(bytes: usize) -> Self {
        let location = Location::caller();
        tracing::debug!(bytes, %location, "allocation failed");
        Error::OutOfMemory { bytes, location }
    }

    /// Where the failing request was made.
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Error::RequestedCapacityTooLarge { location, .. } => location,
            Error::OutOfMemory { location, .. } => location,
        }
    }

    /// Turns the error into a panic, for trait impls that cannot return it.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}
