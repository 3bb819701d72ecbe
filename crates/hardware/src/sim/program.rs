//! Instruction Program.
//!
//! An ordered, bounded list of program lines plus the cursor marking the next line
//! to execute. Each line keeps its raw text for display and is decoded exactly once,
//! when the program is loaded.

use tracing::warn;

use crate::common::DecodeError;
use crate::isa::{Instruction, decode};

/// The seven-line sample program loaded by `load_default_program`.
///
/// Against the initial memory (`mem[i] = i * 10`) it leaves `R1=-50, R2=90,
/// R3=140, R4=40`, `mem[2]=140` and `mem[3]=-50`.
pub const DEFAULT_PROGRAM: [&str; 7] = [
    "LOAD R1, 5",
    "LOAD R2, 9",
    "ADD R3, R1, R2",
    "STORE R3, 2",
    "LOAD R4, 4",
    "SUB R1, R4, R2",
    "STORE R1, 3",
];

/// One program line: raw text and its decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLine {
    raw: String,
    decoded: Result<Instruction, DecodeError>,
}

impl ProgramLine {
    /// Decodes `raw`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let decoded = decode(&raw);
        Self { raw, decoded }
    }

    /// The line as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The decoded instruction or the reason decoding failed.
    pub const fn decoded(&self) -> &Result<Instruction, DecodeError> {
        &self.decoded
    }
}

/// A loaded program and its cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    lines: Vec<ProgramLine>,
    cursor: usize,
    capacity: usize,
}

impl Program {
    /// Creates an empty program that will keep at most `capacity` lines.
    pub const fn new(capacity: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Replaces the program and rewinds the cursor.
    ///
    /// Lines past the capacity are dropped silently (a `warn` event is emitted).
    ///
    /// # Returns
    ///
    /// The number of lines kept.
    pub fn load<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dropped = 0usize;
        self.lines.clear();
        for line in lines {
            if self.lines.len() < self.capacity {
                self.lines.push(ProgramLine::new(line));
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(
                kept = self.lines.len(),
                dropped,
                capacity = self.capacity,
                "program truncated"
            );
        }
        self.cursor = 0;
        self.lines.len()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = 0;
    }

    /// Moves the cursor back to the first line.
    pub const fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Returns the next line and advances the cursor, or `None` at the end.
    pub fn fetch(&mut self) -> Option<&ProgramLine> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line)
    }

    /// Index of the next line to execute, in `[0, len]`.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines are loaded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` once every line has been executed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// Maximum number of lines kept by [`Program::load`].
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The line at `idx`, if any.
    pub fn line(&self, idx: usize) -> Option<&ProgramLine> {
        self.lines.get(idx)
    }

    /// Raw text of the line at `idx`, or `""` when out of range.
    pub fn raw(&self, idx: usize) -> &str {
        self.line(idx).map_or("", ProgramLine::raw)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[ProgramLine] {
        &self.lines
    }
}
