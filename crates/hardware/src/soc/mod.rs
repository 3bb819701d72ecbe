//! Memory-side components.
//!
//! This module organizes the storage the core talks to: the main memory and the
//! `WordStore` trait the cache uses to reach it.

/// Main memory.
pub mod memory;

/// Backing-store trait definitions.
pub mod traits;

pub use memory::Memory;
pub use traits::WordStore;
