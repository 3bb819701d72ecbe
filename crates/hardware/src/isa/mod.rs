//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the decoded instruction type, the text decoder, and the disassembler
//! for the four-instruction teaching ISA.
//!
//! # Instructions
//!
//! * `LOAD Rd, addr`: read a word through the cache.
//! * `STORE Rs, addr`: write a word through the cache (write-through).
//! * `ADD Rd, Rs1, Rs2`: integer addition.
//! * `SUB Rd, Rs1, Rs2`: integer subtraction.

/// Text-to-instruction decoding.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Decoded instruction type and mnemonics.
pub mod instruction;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::Instruction;
