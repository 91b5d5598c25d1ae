//! Shared synchronization vocabulary

use static_assertions::{const_assert, const_assert_eq};

/// Maximum-wait bound for a kernel acquire, in scheduler ticks.
pub type WaitTicks = u64;

/// Sentinel wait bound: block until the mutex is acquired.
pub const MAX_WAIT: WaitTicks = WaitTicks::MAX;

/// Zero wait bound: attempt the acquire and return immediately.
pub const NO_WAIT: WaitTicks = 0;

/// Status code reported to the runtime by the lock and unlock operations.
pub type LockStatus = i32;

/// The operation completed successfully.
pub const LOCK_OK: LockStatus = 0;

/// Generic failure status for an absent mutex handle.
pub const LOCK_INVALID_HANDLE: LockStatus = -1;

/// Kernel-native outcome of an acquire attempt.
///
/// The discriminants mirror the kernel's numeric vocabulary: the blocking
/// lock operation forwards them to the runtime unmodified as its status
/// code, so their values are load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AcquireOutcome {
    /// The mutex was acquired by the calling context.
    Acquired = 0,
    /// The mutex was not acquired within the requested wait bound.
    NotAcquired = 1,
}

// The success discriminant doubles as the runtime success status.
const_assert_eq!(AcquireOutcome::Acquired as LockStatus, LOCK_OK);
const_assert!(AcquireOutcome::NotAcquired as LockStatus != LOCK_OK);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_discriminants() {
        assert_eq!(AcquireOutcome::Acquired as LockStatus, 0);
        assert_eq!(AcquireOutcome::NotAcquired as LockStatus, 1);
    }

    #[test]
    fn test_wait_bounds_distinct() {
        assert_ne!(MAX_WAIT, NO_WAIT);
    }

    #[test]
    fn test_invalid_handle_status_is_negative() {
        assert!(LOCK_INVALID_HANDLE < LOCK_OK);
    }
}
