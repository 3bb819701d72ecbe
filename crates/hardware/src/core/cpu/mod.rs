//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for all simulated
//! hardware state. It coordinates the following:
//! 1. **State Management:** Holds the register file.
//! 2. **Memory Hierarchy:** Owns the cache and the main memory behind it.
//! 3. **Timing:** Carries the per-instruction cycle costs.
//!
//! Program sequencing, history, and cycle totals live one level up in
//! [`crate::sim::Simulator`].

/// Instruction execution and step result construction.
pub mod execution;

/// LOAD/STORE paths through the cache.
pub mod memory;

use crate::common::RegisterFile;
use crate::config::{Config, TimingConfig};
use crate::core::units::cache::Cache;
use crate::soc::Memory;

/// Main CPU structure containing registers, cache, and memory.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Register file (R1..R4).
    pub regs: RegisterFile,
    /// Cache in front of main memory.
    pub cache: Cache,
    /// Main memory.
    pub memory: Memory,
    /// Cycle costs.
    pub timing: TimingConfig,
}

impl Cpu {
    /// Creates a CPU in its power-on state.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory, cache, and timing configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            cache: Cache::new(&config.cache),
            memory: Memory::new(&config.memory),
            timing: config.timing.clone(),
        }
    }

    /// Restores power-on register and memory contents and invalidates the cache.
    ///
    /// The cache mapping mode is kept.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.memory.reset();
        self.cache.invalidate_all();
    }
}
