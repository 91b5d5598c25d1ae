//! Synchronization capability interfaces
//!
//! Both boundaries of the threading bridge are explicit traits. The kernel's
//! native primitives are consumed through [`KernelSync`], so a concrete
//! provider is injected rather than reached through ambient symbols and can
//! be replaced with a stub in tests. The runtime's external-threading
//! contract is expressed as [`SynchronizationPrimitives`], which the bridge
//! implements for the runtime's call sites.

use crate::sync::types::{AcquireOutcome, LockStatus, WaitTicks};

#[cfg(feature = "alloc")]
use alloc::sync::Arc;

/// Trait for the kernel synchronization provider.
///
/// Mutex objects are owned by the provider's side of the boundary; callers
/// only ever hold references to them.
pub trait KernelSync {
    /// Kernel-owned mutual-exclusion object referenced by callers.
    type Mutex;

    /// Attempts to acquire a mutex, waiting for at most `max_wait` ticks.
    ///
    /// [`MAX_WAIT`](crate::sync::types::MAX_WAIT) blocks until the mutex is
    /// acquired; [`NO_WAIT`](crate::sync::types::NO_WAIT) attempts the
    /// acquire without blocking.
    fn acquire(&self, mutex: &Self::Mutex, max_wait: WaitTicks) -> AcquireOutcome;

    /// Releases a mutex.
    ///
    /// Does not verify that the calling context holds the mutex; that
    /// invariant is the caller's responsibility. `force` wakes and cancels
    /// waiting contexts and is never set by the bridge.
    fn release(&self, mutex: &Self::Mutex, force: bool);

    /// Hands the current execution context back to the scheduler.
    fn task_yield(&self);
}

impl<K: KernelSync + ?Sized> KernelSync for &K {
    type Mutex = K::Mutex;

    fn acquire(&self, mutex: &K::Mutex, max_wait: WaitTicks) -> AcquireOutcome {
        (**self).acquire(mutex, max_wait)
    }

    fn release(&self, mutex: &K::Mutex, force: bool) {
        (**self).release(mutex, force)
    }

    fn task_yield(&self) {
        (**self).task_yield()
    }
}

#[cfg(feature = "alloc")]
impl<K: KernelSync + ?Sized> KernelSync for Arc<K> {
    type Mutex = K::Mutex;

    fn acquire(&self, mutex: &K::Mutex, max_wait: WaitTicks) -> AcquireOutcome {
        (**self).acquire(mutex, max_wait)
    }

    fn release(&self, mutex: &K::Mutex, force: bool) {
        (**self).release(mutex, force)
    }

    fn task_yield(&self) {
        (**self).task_yield()
    }
}

/// Trait for the external threading contract of the standard runtime.
///
/// The runtime invokes these operations whenever its own concurrency
/// facilities need synchronization. All failures are reported as ordinary
/// result values in the vocabulary the runtime expects.
pub trait SynchronizationPrimitives {
    /// Mutex handle type threaded through by the runtime.
    type Handle;

    /// Acquires a mutex, blocking until it is available.
    ///
    /// Returns [`LOCK_OK`](crate::sync::types::LOCK_OK) on success and a
    /// negative status for an absent handle.
    fn lock(&self, mutex: Option<&Self::Handle>) -> LockStatus;

    /// Attempts to acquire a mutex without blocking.
    ///
    /// Returns `true` only if the mutex was acquired; an absent handle is
    /// reported as `false`.
    fn try_lock(&self, mutex: Option<&Self::Handle>) -> bool;

    /// Releases a mutex.
    ///
    /// Reports success unconditionally for a present handle. Whether the
    /// calling context actually holds the mutex is not verified here; that
    /// invariant is shared between the caller and the kernel primitive.
    fn unlock(&self, mutex: Option<&Self::Handle>) -> LockStatus;

    /// Yields the current execution context to the scheduler.
    ///
    /// Always returns once the caller is scheduled again; there is no
    /// failure channel.
    fn yield_now(&self);
}
