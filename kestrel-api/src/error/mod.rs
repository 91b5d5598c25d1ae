//! Error handling module for the Kestrel threading bridge

use core::fmt;

use crate::sync::types::{AcquireOutcome, LOCK_INVALID_HANDLE, LockStatus};

/// Error type for bridge operations.
///
/// There are exactly two failure kinds: an absent handle, detected locally
/// before any kernel call, and a refusal reported by the kernel primitive
/// itself. Neither is fatal; both are surfaced to the runtime as ordinary
/// result values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The mutex handle reference is absent; no kernel call was made.
    InvalidHandle,
    /// The kernel primitive did not grant the request.
    KernelDenied(AcquireOutcome),
}

impl Error {
    /// Narrows the error to the status-code vocabulary of the runtime.
    ///
    /// A kernel refusal forwards the kernel's numeric outcome unmodified;
    /// an absent handle maps to the generic negative status.
    pub fn status(&self) -> LockStatus {
        match self {
            Error::InvalidHandle => LOCK_INVALID_HANDLE,
            Error::KernelDenied(outcome) => *outcome as LockStatus,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHandle => write!(f, "Invalid mutex handle"),
            Error::KernelDenied(outcome) => write!(f, "Kernel denied request: {:?}", outcome),
        }
    }
}

/// Result type for operations that can fail.
pub type Result<T> = core::result::Result<T, Error>;

/// Creates a new invalid handle error.
pub fn invalid_handle() -> Error {
    Error::InvalidHandle
}

/// Creates a new kernel denied error.
pub fn kernel_denied(outcome: AcquireOutcome) -> Error {
    Error::KernelDenied(outcome)
}
