//! Error types for memory access, instruction decoding, and step execution.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Access errors:** Addresses outside main memory, raised by memory and cache.
//! 2. **Decode errors:** Malformed operands and unknown opcodes, raised once at program load.
//! 3. **Step errors:** The non-fatal rejection reasons reported by a single step.
//! 4. **Host errors:** Configuration and program-file failures surfaced by the CLI and bindings.
//!
//! None of these errors stop the engine. A rejected instruction still consumes its
//! program slot and the engine remains steppable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Integer type used for addresses as written in instruction text.
///
/// Addresses are signed so that a negative operand such as `LOAD R1, -1`
/// decodes successfully and is then rejected as out of range at execution.
pub type Address = i64;

/// Integer type stored in memory cells, cache lines, and registers.
pub type Word = i64;

/// A memory access that fell outside the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The address is negative or not below the memory size.
    #[error("address {addr} is outside memory (valid range 0..{size})")]
    AddressOutOfRange {
        /// The rejected address.
        addr: Address,
        /// Number of cells in the backing store.
        size: usize,
    },
}

/// Failure to decode one line of program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode is known but its operand list is malformed.
    #[error("invalid instruction `{line}`: {reason}")]
    Invalid {
        /// The raw line as written.
        line: String,
        /// What was wrong with the operands.
        reason: String,
    },
    /// The opcode is not one of LOAD, STORE, ADD, SUB.
    #[error("unrecognized instruction `{line}` (unknown opcode `{opcode}`)")]
    Unrecognized {
        /// The raw line as written.
        line: String,
        /// The first token of the line.
        opcode: String,
    },
}

impl DecodeError {
    /// Returns the raw line the error refers to.
    pub fn line(&self) -> &str {
        match self {
            Self::Invalid { line, .. } | Self::Unrecognized { line, .. } => line,
        }
    }
}

/// Reason a step was rejected without applying its data effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// LOAD or STORE named an address outside memory.
    #[error(transparent)]
    AddressOutOfRange(#[from] AccessError),
    /// A recognized opcode with a malformed operand list.
    #[error(transparent)]
    InvalidInstruction(DecodeError),
    /// An opcode outside the instruction set.
    #[error(transparent)]
    UnrecognizedInstruction(DecodeError),
}

impl From<DecodeError> for StepError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Invalid { .. } => Self::InvalidInstruction(err),
            DecodeError::Unrecognized { .. } => Self::UnrecognizedInstruction(err),
        }
    }
}

/// Configuration that could not be parsed or is internally inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("could not read config file '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A field holds a value the simulator cannot run with.
    #[error("invalid config: {field} must be greater than zero")]
    Zero {
        /// Dotted name of the offending field.
        field: &'static str,
    },
}

/// A program file that could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
