//! Main Memory.
//!
//! This module implements the simulated main memory. It provides:
//! 1. **Storage:** A fixed number of integer cells, the ground truth for all data.
//! 2. **Initialization:** The `i * stride` fill pattern restored on init and reset.
//! 3. **Host access:** Unchecked-style accessors that return defaults instead of errors.

use crate::common::{AccessError, Address, Word};
use crate::config::MemoryConfig;
use crate::soc::traits::WordStore;

/// Word-addressed main memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
    init_stride: Word,
}

impl Memory {
    /// Creates memory sized and filled according to `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory geometry; `size` cells, each starting at `i * init_stride`.
    pub fn new(config: &MemoryConfig) -> Self {
        let mut mem = Self {
            cells: vec![0; config.size],
            init_stride: config.init_stride,
        };
        mem.reset();
        mem
    }

    /// Restores the initial fill pattern.
    pub fn reset(&mut self) {
        let stride = self.init_stride;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = (i as Word).wrapping_mul(stride);
        }
    }

    /// Reads a cell, returning 0 for an out-of-range address.
    pub fn peek(&self, addr: Address) -> Word {
        self.read(addr).unwrap_or(0)
    }

    /// Writes a cell, silently ignoring an out-of-range address.
    ///
    /// # Returns
    ///
    /// `true` if the cell was written.
    pub fn poke(&mut self, addr: Address, val: Word) -> bool {
        self.write(addr, val).is_ok()
    }

    /// Returns the cells in address order.
    pub fn cells(&self) -> &[Word] {
        &self.cells
    }

    /// Renders `[0]: 0,[1]: 10,...` for the visualizer.
    pub fn summary(&self) -> String {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| format!("[{i}]: {v}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl WordStore for Memory {
    fn size(&self) -> usize {
        self.cells.len()
    }

    fn read(&self, addr: Address) -> Result<Word, AccessError> {
        let idx = self.check(addr)?;
        Ok(self.cells[idx])
    }

    fn write(&mut self, addr: Address, val: Word) -> Result<(), AccessError> {
        let idx = self.check(addr)?;
        self.cells[idx] = val;
        Ok(())
    }
}
