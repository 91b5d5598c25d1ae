//! Threading adapter between the standard runtime and the kernel

use kestrel_api::error::{self, Result};
use kestrel_api::sync::interface::{KernelSync, SynchronizationPrimitives};
use kestrel_api::sync::types::{AcquireOutcome, LOCK_OK, LockStatus, MAX_WAIT, NO_WAIT, WaitTicks};

/// Translates the runtime's external threading operations onto an injected
/// kernel synchronization provider.
///
/// The adapter holds no state beyond the provider itself: every mutex lives
/// in the kernel, every handle is borrowed from the caller, and each
/// operation is one forwarded call plus a vocabulary translation. It is
/// therefore safe to share across execution contexts whenever the provider
/// is.
pub struct ThreadingAdapter<K: KernelSync> {
    kernel: K,
}

impl<K: KernelSync> ThreadingAdapter<K> {
    /// Creates an adapter over a kernel synchronization provider.
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Returns a reference to the underlying provider.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Consumes the adapter and returns the provider.
    pub fn into_inner(self) -> K {
        self.kernel
    }

    /// Forwards an acquire to the kernel, rejecting absent handles locally.
    fn acquire_checked(&self, mutex: Option<&K::Mutex>, max_wait: WaitTicks) -> Result<()> {
        let mutex = match mutex {
            Some(mutex) => mutex,
            None => {
                #[cfg(feature = "log")]
                log::debug!("mutex acquire rejected: absent handle");
                return Err(error::invalid_handle());
            }
        };
        match self.kernel.acquire(mutex, max_wait) {
            AcquireOutcome::Acquired => Ok(()),
            outcome => Err(error::kernel_denied(outcome)),
        }
    }
}

impl<K: KernelSync> SynchronizationPrimitives for ThreadingAdapter<K> {
    type Handle = K::Mutex;

    fn lock(&self, mutex: Option<&K::Mutex>) -> LockStatus {
        match self.acquire_checked(mutex, MAX_WAIT) {
            Ok(()) => LOCK_OK,
            Err(err) => err.status(),
        }
    }

    fn try_lock(&self, mutex: Option<&K::Mutex>) -> bool {
        self.acquire_checked(mutex, NO_WAIT).is_ok()
    }

    fn unlock(&self, mutex: Option<&K::Mutex>) -> LockStatus {
        match mutex {
            Some(mutex) => {
                // Fire and forget: the kernel release does not fail for a
                // present handle, and ownership is not verified here.
                self.kernel.release(mutex, false);
                LOCK_OK
            }
            None => {
                #[cfg(feature = "log")]
                log::debug!("mutex release rejected: absent handle");
                error::invalid_handle().status()
            }
        }
    }

    fn yield_now(&self) {
        self.kernel.task_yield();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_api::sync::types::LOCK_INVALID_HANDLE;
    use mockall::mock;

    mock! {
        Kernel {}

        impl KernelSync for Kernel {
            type Mutex = ();

            fn acquire(&self, mutex: &(), max_wait: WaitTicks) -> AcquireOutcome;
            fn release(&self, mutex: &(), force: bool);
            fn task_yield(&self);
        }
    }

    #[test]
    fn test_lock_waits_unbounded() {
        let mut kernel = MockKernel::new();
        kernel
            .expect_acquire()
            .withf(|_, max_wait| *max_wait == MAX_WAIT)
            .times(1)
            .return_const(AcquireOutcome::Acquired);

        let adapter = ThreadingAdapter::new(kernel);
        assert_eq!(adapter.lock(Some(&())), LOCK_OK);
    }

    #[test]
    fn test_lock_forwards_kernel_refusal() {
        let mut kernel = MockKernel::new();
        kernel
            .expect_acquire()
            .times(1)
            .return_const(AcquireOutcome::NotAcquired);

        let adapter = ThreadingAdapter::new(kernel);
        assert_eq!(
            adapter.lock(Some(&())),
            AcquireOutcome::NotAcquired as LockStatus
        );
    }

    #[test]
    fn test_lock_rejects_absent_handle_without_kernel_call() {
        // No expectations: any provider call would panic the mock.
        let adapter = ThreadingAdapter::new(MockKernel::new());
        assert_eq!(adapter.lock(None), LOCK_INVALID_HANDLE);
    }

    #[test]
    fn test_try_lock_attempts_with_zero_wait() {
        let mut kernel = MockKernel::new();
        kernel
            .expect_acquire()
            .withf(|_, max_wait| *max_wait == NO_WAIT)
            .times(1)
            .return_const(AcquireOutcome::Acquired);

        let adapter = ThreadingAdapter::new(kernel);
        assert!(adapter.try_lock(Some(&())));
    }

    #[test]
    fn test_try_lock_maps_refusal_to_false() {
        let mut kernel = MockKernel::new();
        kernel
            .expect_acquire()
            .times(1)
            .return_const(AcquireOutcome::NotAcquired);

        let adapter = ThreadingAdapter::new(kernel);
        assert!(!adapter.try_lock(Some(&())));
    }

    #[test]
    fn test_try_lock_rejects_absent_handle_without_kernel_call() {
        let adapter = ThreadingAdapter::new(MockKernel::new());
        assert!(!adapter.try_lock(None));
    }

    #[test]
    fn test_unlock_releases_without_forcing() {
        let mut kernel = MockKernel::new();
        kernel
            .expect_release()
            .withf(|_, force| !force)
            .times(1)
            .return_const(());

        let adapter = ThreadingAdapter::new(kernel);
        assert_eq!(adapter.unlock(Some(&())), LOCK_OK);
    }

    #[test]
    fn test_unlock_rejects_absent_handle_without_kernel_call() {
        let adapter = ThreadingAdapter::new(MockKernel::new());
        assert_eq!(adapter.unlock(None), LOCK_INVALID_HANDLE);
    }

    #[test]
    fn test_yield_forwards_to_scheduler() {
        let mut kernel = MockKernel::new();
        kernel.expect_task_yield().times(2).return_const(());

        let adapter = ThreadingAdapter::new(kernel);
        adapter.yield_now();
        adapter.yield_now();
    }
}
