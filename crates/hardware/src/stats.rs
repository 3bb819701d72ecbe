//! Simulation statistics collection and reporting.
//!
//! This module tracks what a session has executed. It provides:
//! 1. **Cycles and steps:** Total cycles charged and the number of steps taken.
//! 2. **Instruction mix:** Completed LOAD, STORE, and ALU instruction counts.
//! 3. **Outcomes:** Rejections by kind and polls past the end of the program.
//! 4. **Memory:** Cache hits and misses observed by completed memory accesses.
//! 5. **Cost profile:** The per-instruction cost series a visualizer plots as a bar chart.

use std::fmt::Write as _;

use serde::Serialize;

use crate::common::StepError;
use crate::core::{StepOutcome, StepResult};
use crate::isa::Instruction;

/// One bar of the cost profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostSample {
    /// Mnemonic of the instruction that was charged.
    pub label: &'static str,
    /// Cycles charged.
    pub cycles: u64,
}

/// Statistics accumulated over the steps of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles charged.
    pub cycles: u64,
    /// Steps that fetched a program line, including rejected ones.
    pub steps: u64,

    /// Completed LOAD instructions.
    pub inst_load: u64,
    /// Completed STORE instructions.
    pub inst_store: u64,
    /// Completed ADD and SUB instructions.
    pub inst_alu: u64,

    /// LOAD/STORE rejected for an address outside memory.
    pub rejected_address: u64,
    /// Lines with a known opcode but malformed operands.
    pub rejected_invalid: u64,
    /// Lines with an unknown opcode.
    pub rejected_unrecognized: u64,
    /// Steps taken after the program was exhausted.
    pub exhausted_polls: u64,

    /// Cache hits seen by completed LOAD/STORE.
    pub cache_hits: u64,
    /// Cache misses seen by completed LOAD/STORE.
    pub cache_misses: u64,

    /// Cost of every step that charged cycles, in execution order.
    pub cost_profile: Vec<CostSample>,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "outcomes", "memory", "profile"];

impl SimStats {
    /// Folds one step result into the statistics.
    pub fn record(&mut self, result: &StepResult) {
        match &result.outcome {
            StepOutcome::ProgramExhausted => {
                self.exhausted_polls += 1;
                return;
            }
            StepOutcome::MemoryAccess { hit } => {
                if matches!(result.instruction, Some(Instruction::Store { .. })) {
                    self.inst_store += 1;
                } else {
                    self.inst_load += 1;
                }
                if *hit {
                    self.cache_hits += 1;
                } else {
                    self.cache_misses += 1;
                }
            }
            StepOutcome::Arithmetic => self.inst_alu += 1,
            StepOutcome::Rejected(err) => match err {
                StepError::AddressOutOfRange(_) => self.rejected_address += 1,
                StepError::InvalidInstruction(_) => self.rejected_invalid += 1,
                StepError::UnrecognizedInstruction(_) => self.rejected_unrecognized += 1,
            },
        }

        self.steps += 1;
        self.cycles = self.cycles.saturating_add(result.cost);
        if result.cost > 0 {
            self.cost_profile.push(CostSample {
                label: result.label(),
                cycles: result.cost,
            });
        }
    }

    /// Fraction of completed memory accesses that hit, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Average cycles per completed or rejected step.
    pub fn cycles_per_step(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.cycles as f64 / self.steps as f64
        }
    }

    /// Renders only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Unknown names
    /// are ignored. Pass an empty slice to render every section.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let steps = self.steps.max(1) as f64;
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "CACHE SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_steps                {}", self.steps);
            let _ = writeln!(out, "sim_cycles_per_step      {:.2}", self.cycles_per_step());
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.alu", self.inst_alu),
            ] {
                let _ = writeln!(
                    out,
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / steps) * 100.0
                );
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("outcomes") {
            let _ = writeln!(out, "OUTCOMES");
            let _ = writeln!(out, "  rejected.address       {}", self.rejected_address);
            let _ = writeln!(out, "  rejected.invalid       {}", self.rejected_invalid);
            let _ = writeln!(out, "  rejected.unrecognized  {}", self.rejected_unrecognized);
            let _ = writeln!(out, "  polls.exhausted        {}", self.exhausted_polls);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("memory") {
            let total = self.cache_hits + self.cache_misses;
            let _ = writeln!(out, "MEMORY HIERARCHY");
            let _ = writeln!(
                out,
                "  cache  accesses: {total:<10} | hits: {:<10} | hit_rate: {:.2}%",
                self.cache_hits,
                self.hit_rate() * 100.0
            );
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("profile") {
            let _ = writeln!(out, "COST PROFILE");
            for (idx, sample) in self.cost_profile.iter().enumerate() {
                let bar = "#".repeat(usize::try_from(sample.cycles).unwrap_or(usize::MAX).min(40));
                let _ = writeln!(
                    out,
                    "  {idx:>3} {:<6} {:>3} {bar}",
                    sample.label, sample.cycles
                );
            }
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the requested sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
