use std::cell::Cell;

use cachesim_core::common::{AccessError, Address, Word};
use cachesim_core::soc::WordStore;

/// A backing store that counts reads and writes.
///
/// Cells start at `i * 10` like main memory, so results are comparable.
pub struct CountingMemory {
    cells: Vec<Word>,
    reads: Cell<usize>,
    writes: usize,
}

impl CountingMemory {
    pub fn new(size: usize) -> Self {
        Self {
            cells: (0..size).map(|i| i as Word * 10).collect(),
            reads: Cell::new(0),
            writes: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn cell(&self, idx: usize) -> Word {
        self.cells[idx]
    }
}

impl WordStore for CountingMemory {
    fn size(&self) -> usize {
        self.cells.len()
    }

    fn read(&self, addr: Address) -> Result<Word, AccessError> {
        let idx = self.check(addr)?;
        self.reads.set(self.reads.get() + 1);
        Ok(self.cells[idx])
    }

    fn write(&mut self, addr: Address, val: Word) -> Result<(), AccessError> {
        let idx = self.check(addr)?;
        self.writes += 1;
        self.cells[idx] = val;
        Ok(())
    }
}
