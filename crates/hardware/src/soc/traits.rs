//! Backing-store trait for word-addressed memory.
//!
//! This module defines the `WordStore` trait implemented by anything the cache can sit in
//! front of. It provides:
//! 1. **Identification:** `size` for bounds checking before any line is touched.
//! 2. **Access:** Checked word read and write at a cell address.
//!
//! Main memory is the only production implementor; tests substitute mocks that count
//! accesses.

use crate::common::{AccessError, Address, Word};

/// A word-addressed store with a fixed number of cells.
pub trait WordStore {
    /// Returns the number of addressable cells.
    fn size(&self) -> usize;

    /// Reads the cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr` is not in `[0, size)`.
    fn read(&self, addr: Address) -> Result<Word, AccessError>;

    /// Writes `val` to the cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr` is not in `[0, size)`.
    fn write(&mut self, addr: Address, val: Word) -> Result<(), AccessError>;

    /// Converts `addr` to a cell index, or reports it out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr` is negative or not
    /// below [`WordStore::size`].
    fn check(&self, addr: Address) -> Result<usize, AccessError> {
        let size = self.size();
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < size)
            .ok_or(AccessError::AddressOutOfRange { addr, size })
    }
}
