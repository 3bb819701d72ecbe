//! Cache Replacement Policies.
//!
//! Implements the algorithm for selecting victim lines in the fully-associative
//! placement mode. Direct-mapped placement has no choice to make and uses no policy.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by a global use clock.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;
