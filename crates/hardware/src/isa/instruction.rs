//! Decoded instruction representation.
//!
//! Program text is decoded once, when a program is loaded, into the `Instruction`
//! variant below. Execution never looks at text again.

use crate::common::{Address, Register};

/// Assembler mnemonic for a load.
pub const LOAD: &str = "LOAD";
/// Assembler mnemonic for a store.
pub const STORE: &str = "STORE";
/// Assembler mnemonic for an addition.
pub const ADD: &str = "ADD";
/// Assembler mnemonic for a subtraction.
pub const SUB: &str = "SUB";

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `LOAD dst, addr`: `dst <- mem[addr]` through the cache.
    Load {
        /// Destination register.
        dst: Register,
        /// Word address.
        addr: Address,
    },
    /// `STORE src, addr`: `mem[addr] <- src` through the cache, write-through.
    Store {
        /// Source register.
        src: Register,
        /// Word address.
        addr: Address,
    },
    /// `ADD dst, src1, src2`: `dst <- src1 + src2`.
    Add {
        /// Destination register.
        dst: Register,
        /// First operand.
        src1: Register,
        /// Second operand.
        src2: Register,
    },
    /// `SUB dst, src1, src2`: `dst <- src1 - src2`.
    Sub {
        /// Destination register.
        dst: Register,
        /// Minuend.
        src1: Register,
        /// Subtrahend.
        src2: Register,
    },
}

impl Instruction {
    /// Returns the assembler mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Load { .. } => LOAD,
            Self::Store { .. } => STORE,
            Self::Add { .. } => ADD,
            Self::Sub { .. } => SUB,
        }
    }

    /// Returns the memory address touched, if this is a LOAD or STORE.
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::Load { addr, .. } | Self::Store { addr, .. } => Some(*addr),
            Self::Add { .. } | Self::Sub { .. } => None,
        }
    }

    /// Returns `true` for LOAD and STORE.
    pub const fn is_memory(&self) -> bool {
        self.address().is_some()
    }
}
