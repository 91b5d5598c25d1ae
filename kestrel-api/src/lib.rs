//! Kestrel API - Synchronization interfaces and types for the Kestrel
//! operating system
//!
//! This crate provides the shared synchronization vocabulary used at the
//! boundary between the standard runtime's external-threading contract and
//! the kernel's native primitives. It defines the capability traits both
//! sides program against and the result types translated between them.
//!
//! # Architecture
//!
//! The API is organized into two modules:
//!
//! - **Sync**: capability interfaces ([`KernelSync`],
//!   [`SynchronizationPrimitives`]) and the acquire/wait/status vocabulary
//! - **Error**: the bridge error taxonomy and its status-code narrowing
//!
//! # Design Principles
//!
//! - **Dependency Inversion**: the bridge depends on the [`KernelSync`]
//!   abstraction, never on kernel symbols
//! - **Interface Segregation**: one small trait per boundary
//! - **Value-Based Failure**: errors are returned in the caller's expected
//!   vocabulary, never unwound across the boundary
//!
//! # Usage
//!
//! ```rust
//! use kestrel_api::sync::{AcquireOutcome, KernelSync, WaitTicks};
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
//! ```
//!
//! [`KernelSync`]: crate::sync::KernelSync
//! [`SynchronizationPrimitives`]: crate::sync::SynchronizationPrimitives

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod error;
pub mod sync;

// Re-export commonly used types
pub use crate::error::{Error, Result};
pub use crate::sync::interface::{KernelSync, SynchronizationPrimitives};
pub use crate::sync::types::*;
