//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by ADD and SUB. Arithmetic wraps
//! on overflow so that no register contents can abort a step.

use crate::common::Word;

/// ALU operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
}

impl AluOp {
    /// Infix symbol used in operation text.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
        }
    }
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a` - First operand.
    /// * `b` - Second operand.
    ///
    /// # Returns
    ///
    /// The wrapped result.
    ///
    /// # Examples
    ///
    /// ```
    /// use cachesim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 50, 90), 140);
    /// assert_eq!(Alu::execute(AluOp::Sub, 40, 90), -50);
    /// assert_eq!(Alu::execute(AluOp::Add, i64::MAX, 1), i64::MIN);
    /// ```
    pub const fn execute(op: AluOp, a: Word, b: Word) -> Word {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
        }
    }
}
