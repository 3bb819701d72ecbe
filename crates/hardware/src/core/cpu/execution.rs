//! Instruction Execution.
//!
//! This module executes one decoded instruction against the CPU state and describes
//! what happened. It provides:
//! 1. **Dispatch:** LOAD/STORE through the cache, ADD/SUB through the ALU.
//! 2. **Costing:** Hit, miss, and ALU cycle costs from the timing configuration.
//! 3. **Observability:** The operation and explanation text shown by the visualizer,
//!    with an explicit outcome kind so callers never have to parse text.

use std::fmt;

use tracing::{debug, warn};

use super::Cpu;
use crate::common::{DecodeError, Register, StepError};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::Instruction;

/// Operation text reported when stepping past the last instruction.
pub const END_OF_PROGRAM: &str = "End of program";

/// Explanation text reported when stepping past the last instruction.
pub const NO_MORE_INSTRUCTIONS: &str = "No more instructions to execute.";

/// Kind of outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A LOAD or STORE completed; `hit` is the result of its cache lookup.
    MemoryAccess {
        /// Whether the lookup hit.
        hit: bool,
    },
    /// An ADD or SUB completed.
    Arithmetic,
    /// The instruction was skipped without data effect.
    Rejected(StepError),
    /// The cursor was already past the last instruction.
    ProgramExhausted,
}

impl StepOutcome {
    /// Returns the cache hit flag for a completed memory access.
    pub const fn hit(&self) -> Option<bool> {
        match self {
            Self::MemoryAccess { hit } => Some(*hit),
            _ => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub const fn error(&self) -> Option<&StepError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the step applied its data effect.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::MemoryAccess { .. } | Self::Arithmetic)
    }
}

/// Everything observable about one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Outcome kind.
    pub outcome: StepOutcome,
    /// The instruction that ran, when the line decoded.
    pub instruction: Option<Instruction>,
    /// Short description of the data movement, e.g. `LOAD: Memory[5] -> R1`.
    pub operation: String,
    /// Longer explanation, e.g. `LOAD from memory (MISS). Value=50`.
    pub explanation: String,
    /// Cycles charged.
    pub cost: u64,
}

impl StepResult {
    /// The result of stepping past the end of the program.
    pub fn exhausted() -> Self {
        Self {
            outcome: StepOutcome::ProgramExhausted,
            instruction: None,
            operation: END_OF_PROGRAM.to_string(),
            explanation: NO_MORE_INSTRUCTIONS.to_string(),
            cost: 0,
        }
    }

    /// The result of a line that failed to decode. The operation echoes the raw line.
    pub fn undecodable(err: DecodeError) -> Self {
        warn!(%err, "skipping undecodable instruction");
        Self {
            operation: err.line().to_string(),
            explanation: err.to_string(),
            outcome: StepOutcome::Rejected(StepError::from(err)),
            instruction: None,
            cost: 0,
        }
    }

    /// Short label for cost profiles: the mnemonic, or `"?"` for undecodable lines.
    pub fn label(&self) -> &'static str {
        self.instruction.as_ref().map_or("?", Instruction::mnemonic)
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<36} | {:>3} cycles | {}",
            self.operation, self.cost, self.explanation
        )
    }
}

impl Cpu {
    /// Executes one decoded instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction to run.
    ///
    /// # Returns
    ///
    /// A [`StepResult`] describing the effect. An out-of-range LOAD/STORE yields
    /// `StepOutcome::Rejected` with cost 0 and no state change.
    pub fn execute(&mut self, inst: Instruction) -> StepResult {
        let result = match inst {
            Instruction::Load { dst, addr } => match self.load(dst, addr) {
                Ok(access) => {
                    let (how, tag) = if access.hit {
                        ("via cache", "HIT")
                    } else {
                        ("from memory", "MISS")
                    };
                    self.completed(
                        inst,
                        access.hit,
                        format!("LOAD: Memory[{addr}] -> {dst}"),
                        format!("LOAD {how} ({tag}). Value={}", access.data),
                    )
                }
                Err(err) => Self::rejected(
                    inst,
                    format!("LOAD (addr={addr} invalid) -> {dst}"),
                    err.into(),
                ),
            },
            Instruction::Store { src, addr } => match self.store(src, addr) {
                Ok(access) => {
                    let tag = if access.hit { "HIT" } else { "MISS" };
                    self.completed(
                        inst,
                        access.hit,
                        format!("STORE: Memory[{addr}] (value={}) <- {src}", access.data),
                        format!(
                            "STORE with {tag}. Value {} written to cache and memory.",
                            access.data
                        ),
                    )
                }
                Err(err) => Self::rejected(
                    inst,
                    format!("STORE (addr={addr} invalid) <- {src}"),
                    err.into(),
                ),
            },
            Instruction::Add { dst, src1, src2 } => {
                self.arithmetic(inst, AluOp::Add, dst, src1, src2)
            }
            Instruction::Sub { dst, src1, src2 } => {
                self.arithmetic(inst, AluOp::Sub, dst, src1, src2)
            }
        };

        debug!(
            inst = %inst,
            cost = result.cost,
            outcome = ?result.outcome,
            "executed instruction"
        );
        result
    }

    fn arithmetic(
        &mut self,
        inst: Instruction,
        op: AluOp,
        dst: Register,
        src1: Register,
        src2: Register,
    ) -> StepResult {
        let a = self.regs.get(src1);
        let b = self.regs.get(src2);
        let value = Alu::execute(op, a, b);
        self.regs.set(dst, value);

        let verb = match op {
            AluOp::Add => "Sum",
            AluOp::Sub => "Difference",
        };
        let sym = op.symbol();
        StepResult {
            outcome: StepOutcome::Arithmetic,
            instruction: Some(inst),
            operation: format!("{}: {src1} {sym} {src2} -> {dst}", inst.mnemonic()),
            explanation: format!("{verb} of {a} {sym} {b} = {value}"),
            cost: self.timing.alu_cycles,
        }
    }

    fn completed(
        &self,
        inst: Instruction,
        hit: bool,
        operation: String,
        explanation: String,
    ) -> StepResult {
        StepResult {
            outcome: StepOutcome::MemoryAccess { hit },
            instruction: Some(inst),
            operation,
            explanation,
            cost: self.timing.memory_cycles(hit),
        }
    }

    fn rejected(inst: Instruction, operation: String, err: StepError) -> StepResult {
        warn!(%inst, %err, "instruction rejected");
        StepResult {
            explanation: err.to_string(),
            outcome: StepOutcome::Rejected(err),
            instruction: Some(inst),
            operation,
            cost: 0,
        }
    }
}
