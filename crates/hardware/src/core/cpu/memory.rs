//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the memory subsystem.
//! It performs the following:
//! 1. **Loads:** Reads a word through the cache into a register.
//! 2. **Stores:** Writes a register through the cache into memory (write-through).
//!
//! Both paths reject out-of-range addresses before touching registers, lines, or
//! counters.

use super::Cpu;
use crate::common::{AccessError, Address, Register};
use crate::core::units::cache::Access;

impl Cpu {
    /// Loads `mem[addr]` into `dst` through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] without modifying `dst`.
    pub fn load(&mut self, dst: Register, addr: Address) -> Result<Access, AccessError> {
        let access = self.cache.lookup_or_load(addr, &self.memory)?;
        self.regs.set(dst, access.data);
        Ok(access)
    }

    /// Stores the value of `src` to `mem[addr]` through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] without modifying memory or the cache.
    pub fn store(&mut self, src: Register, addr: Address) -> Result<Access, AccessError> {
        let val = self.regs.get(src);
        self.cache.store(addr, val, &mut self.memory)
    }
}
