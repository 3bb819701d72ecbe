//! Register names and the register file.
//!
//! This module provides the architectural register state of the simulated core. It provides:
//! 1. **Naming:** The `Register` enum (`R1`..`R4`) and its text form used by the assembler.
//! 2. **Storage:** The `RegisterFile` holding one word per register.
//! 3. **Observability:** A one-line summary rendered for the visualizer.

use std::fmt;
use std::str::FromStr;

use super::error::Word;

/// Number of architectural registers.
pub const REGISTER_COUNT: usize = 4;

/// One of the four general-purpose registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    /// Register `R1`.
    R1,
    /// Register `R2`.
    R2,
    /// Register `R3`.
    R3,
    /// Register `R4`.
    R4,
}

impl Register {
    /// All registers in index order.
    pub const ALL: [Self; REGISTER_COUNT] = [Self::R1, Self::R2, Self::R3, Self::R4];

    /// Returns the zero-based storage index of this register.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::R1 => 0,
            Self::R2 => 1,
            Self::R3 => 2,
            Self::R4 => 3,
        }
    }

    /// Returns the assembler name (`"R1"`..`"R4"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a token does not name a register.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a register (expected R1, R2, R3 or R4)")]
pub struct UnknownRegister(pub String);

impl FromStr for Register {
    type Err = UnknownRegister;

    /// Parses an exact, case-sensitive register name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R1" => Ok(Self::R1),
            "R2" => Ok(Self::R2),
            "R3" => Ok(Self::R3),
            "R4" => Ok(Self::R4),
            other => Err(UnknownRegister(other.to_string())),
        }
    }
}

/// The four-entry integer register file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [Word; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline]
    pub const fn get(&self, reg: Register) -> Word {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn set(&mut self, reg: Register, val: Word) {
        self.regs[reg.index()] = val;
    }

    /// Writes a register by its assembler name.
    ///
    /// Unknown names are ignored so that a host passing arbitrary text cannot
    /// disturb the register state.
    ///
    /// # Arguments
    ///
    /// * `name` - Register name such as `"R3"`.
    /// * `val` - Value to store.
    ///
    /// # Returns
    ///
    /// `true` if a register was written.
    pub fn set_named(&mut self, name: &str, val: Word) -> bool {
        match name.parse::<Register>() {
            Ok(reg) => {
                self.set(reg, val);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "ignoring write to unknown register");
                false
            }
        }
    }

    /// Resets every register to zero.
    pub fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Renders `R1=.., R2=.., R3=.., R4=..`.
    pub fn summary(&self) -> String {
        Register::ALL
            .iter()
            .map(|r| format!("{r}={}", self.get(*r)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
