//! Instruction Disassembler.
//!
//! Converts a decoded `Instruction` back into canonical assembler text for
//! program listings, logging, and test diagnostics. The output always uses the
//! comma-separated form and decodes back to the same instruction.
//!
//! # Usage
//!
//! ```
//! use cachesim_core::common::Register;
//! use cachesim_core::isa::disasm::disassemble;
//! use cachesim_core::isa::instruction::Instruction;
//!
//! let inst = Instruction::Add { dst: Register::R3, src1: Register::R1, src2: Register::R2 };
//! assert_eq!(disassemble(&inst), "ADD R3, R1, R2");
//! ```

use std::fmt;

use crate::isa::instruction::Instruction;

/// Disassembles an instruction into canonical text.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.mnemonic();
        match self {
            Self::Load { dst: reg, addr } | Self::Store { src: reg, addr } => {
                write!(f, "{op} {reg}, {addr}")
            }
            Self::Add { dst, src1, src2 } | Self::Sub { dst, src1, src2 } => {
                write!(f, "{op} {dst}, {src1}, {src2}")
            }
        }
    }
}
