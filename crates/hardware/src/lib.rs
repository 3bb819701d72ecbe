//! Didactic single-core CPU and cache simulator library.
//!
//! This crate implements a step-at-a-time teaching simulator with the following:
//! 1. **Core:** Four general-purpose registers, an ALU, and instruction execution that
//!    reports operation text, explanation text, and cycle cost for every step.
//! 2. **Memory:** A small word-addressed main memory behind a write-through cache with
//!    direct-mapped or fully associative (LRU) placement.
//! 3. **ISA:** Decoding and disassembly of the LOAD/STORE/ADD/SUB instruction text.
//! 4. **Simulation:** Program sequencing, history log, configuration, program loading,
//!    and statistics collection.

/// Common types (addresses, words, registers, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, mapping mode, hierarchical config structures).
pub mod config;
/// CPU core (execution, memory access) and execution units (ALU, cache).
pub mod core;
/// Instruction set (instruction type, decode, disassembly).
pub mod isa;
/// Simulator session, program container, and program file loader.
pub mod sim;
/// Main memory and the backing-store trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU type; holds registers, cache, and memory.
pub use crate::core::Cpu;
/// Top-level simulator session; construct with `Simulator::new` or `Simulator::default`.
pub use crate::sim::Simulator;
