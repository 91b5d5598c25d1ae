//! Synchronization primitives and interfaces
//!
//! This module provides the capability traits and shared vocabulary of the
//! threading bridge, together with the spinlock and atomic primitives used
//! by in-kernel consumers of this API.

pub mod interface;
pub mod types;

pub use interface::{KernelSync, SynchronizationPrimitives};
pub use types::*;

pub use spin::Mutex;
pub use spin::RwLock;
pub use core::sync::atomic::{AtomicBool, AtomicIsize, AtomicPtr, AtomicUsize, Ordering};
