//! Assembler Text Decoder.
//!
//! This module turns one line of program text into an `Instruction`. It performs:
//! 1. **Opcode split:** The first whitespace-delimited token is the opcode, matched
//!    exactly against `LOAD`, `STORE`, `ADD`, `SUB`.
//! 2. **Operand split:** The remainder is split into operands separated by a comma
//!    (with optional surrounding whitespace) or by whitespace alone, so `R1,5`,
//!    `R1, 5` and `R1 5` are equivalent. Empty operands such as `R1,,5` are rejected.
//! 3. **Operand parsing:** Registers must be exactly `R1`..`R4`; addresses are
//!    signed decimal integers. Range checking of addresses happens at execution.
//!
//! A malformed operand list for a known opcode is `DecodeError::Invalid`; an
//! unknown opcode is `DecodeError::Unrecognized`.

use crate::common::{Address, DecodeError, Register};
use crate::isa::instruction::{ADD, Instruction, LOAD, STORE, SUB};

/// Decodes one line of program text.
///
/// # Arguments
///
/// * `line` - Raw line as written by the user.
///
/// # Returns
///
/// The decoded instruction.
///
/// # Errors
///
/// [`DecodeError::Unrecognized`] when the opcode is unknown and
/// [`DecodeError::Invalid`] for an empty line or malformed operands.
pub fn decode(line: &str) -> Result<Instruction, DecodeError> {
    let trimmed = line.trim();
    let (opcode, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    if opcode.is_empty() {
        return Err(invalid(line, "empty line"));
    }

    match opcode {
        LOAD | STORE => {
            let ops = operands(line, rest)?;
            let [reg, addr] = ops.as_slice() else {
                return Err(arity(line, opcode, 2, "register, address", ops.len()));
            };
            let reg = register(line, reg)?;
            let addr = address(line, addr)?;
            Ok(if opcode == LOAD {
                Instruction::Load { dst: reg, addr }
            } else {
                Instruction::Store { src: reg, addr }
            })
        }
        ADD | SUB => {
            let ops = operands(line, rest)?;
            let [dst, src1, src2] = ops.as_slice() else {
                return Err(arity(line, opcode, 3, "register, register, register", ops.len()));
            };
            let dst = register(line, dst)?;
            let src1 = register(line, src1)?;
            let src2 = register(line, src2)?;
            Ok(if opcode == ADD {
                Instruction::Add { dst, src1, src2 }
            } else {
                Instruction::Sub { dst, src1, src2 }
            })
        }
        other => Err(DecodeError::Unrecognized {
            line: line.to_string(),
            opcode: other.to_string(),
        }),
    }
}

/// Splits an operand list on commas and whitespace.
fn operands<'a>(line: &str, rest: &'a str) -> Result<Vec<&'a str>, DecodeError> {
    if rest.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for segment in rest.split(',') {
        let before = out.len();
        out.extend(segment.split_whitespace());
        if out.len() == before {
            return Err(invalid(line, "empty operand between commas"));
        }
    }
    Ok(out)
}

fn register(line: &str, token: &str) -> Result<Register, DecodeError> {
    token
        .parse::<Register>()
        .map_err(|e| invalid(line, &e.to_string()))
}

fn address(line: &str, token: &str) -> Result<Address, DecodeError> {
    token
        .parse::<Address>()
        .map_err(|_| invalid(line, &format!("`{token}` is not an integer address")))
}

fn arity(line: &str, opcode: &str, want: usize, shape: &str, got: usize) -> DecodeError {
    invalid(
        line,
        &format!("{opcode} takes {want} operands ({shape}), found {got}"),
    )
}

fn invalid(line: &str, reason: &str) -> DecodeError {
    DecodeError::Invalid {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}
