//! Core processor implementation.
//!
//! This module contains the CPU state container, instruction execution, and the
//! execution units (ALU, cache) it drives.

/// CPU core implementation and instruction execution.
pub mod cpu;

/// Execution units (ALU, cache).
pub mod units;

pub use self::cpu::Cpu;
pub use self::cpu::execution::{StepOutcome, StepResult};
