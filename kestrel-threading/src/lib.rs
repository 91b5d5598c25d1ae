//! Kestrel Threading - External threading bridge between the standard
//! runtime and the kernel
//!
//! The standard runtime expects a small set of external threading
//! operations (lock, try-lock, unlock, yield) to be supplied by the host
//! environment. Inside the Kestrel kernel no hosted threading library
//! exists, so this crate supplies them: [`ThreadingAdapter`] translates the
//! runtime's contract onto the kernel's native mutex and yield primitives,
//! reached through an injected [`KernelSync`] provider.
//!
//! The adapter is pure translation glue. It owns no mutexes, keeps no
//! state, and adds no waiting, retrying, or ordering of its own; every
//! blocking decision is delegated to the kernel primitive.
//!
//! # Usage
//!
//! ```rust
//! use kestrel_api::sync::{
//!     AcquireOutcome, KernelSync, SynchronizationPrimitives, WaitTicks,
//! };
//! use kestrel_threading::ThreadingAdapter;
//!
//! struct NullKernel;
//!
//! impl KernelSync for NullKernel {
//!     type Mutex = ();
//!
//!     fn acquire(&self, _mutex: &(), _max_wait: WaitTicks) -> AcquireOutcome {
//!         AcquireOutcome::Acquired
//!     }
//!
//!     fn release(&self, _mutex: &(), _force: bool) {}
//!
//!     fn task_yield(&self) {}
//! }
//!
//! let adapter = ThreadingAdapter::new(NullKernel);
//! let mutex = ();
//! assert_eq!(adapter.lock(Some(&mutex)), 0);
//! assert_eq!(adapter.unlock(Some(&mutex)), 0);
//! ```
//!
//! [`KernelSync`]: kestrel_api::sync::KernelSync

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod adapter;

pub use crate::adapter::ThreadingAdapter;
