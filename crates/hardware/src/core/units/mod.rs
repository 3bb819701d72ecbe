//! Execution units and functional components.
//!
//! This module contains the integer ALU and the cache that fronts main memory.

/// Arithmetic Logic Unit for ADD and SUB.
pub mod alu;

/// Cache with direct-mapped and LRU fully-associative placement.
pub mod cache;
