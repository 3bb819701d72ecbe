//! Simulator: owns the CPU, the loaded program, and the session state side-by-side.
//!
//! Every host-facing operation lives here. The CPU executes decoded instructions;
//! the simulator sequences the program, charges cycles, keeps the history log, and
//! folds each step into the statistics.

use tracing::{debug, info};

use crate::common::{Register, Word};
use crate::config::{Config, MappingMode};
use crate::core::{Cpu, StepResult};
use crate::sim::program::{DEFAULT_PROGRAM, Program};
use crate::sim::state::ExecutionState;
use crate::stats::SimStats;

/// Text returned by [`Simulator::cache_line_summary`] for an index outside the cache.
pub const INVALID_LINE: &str = "Invalid line";

/// Top-level simulator session.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// CPU architectural state (registers, cache, memory).
    pub cpu: Cpu,
    program: Program,
    state: ExecutionState,
    stats: SimStats,
    config: Config,
    explanation_mode: bool,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Simulator {
    /// Creates a simulator in its initial state.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory, cache, timing, and program settings. The caller is
    ///   expected to have run [`Config::validate`].
    pub fn new(config: Config) -> Self {
        Self {
            cpu: Cpu::new(&config),
            program: Program::new(config.program.max_instructions),
            state: ExecutionState::new(),
            stats: SimStats::default(),
            explanation_mode: config.general.explanation_mode,
            config,
        }
    }

    /// Returns the configuration the session was created with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Restores the initial state and clears the program.
    ///
    /// The cache goes back to direct-mapped and explanation mode is switched
    /// off, whatever the configuration started the session with.
    pub fn init(&mut self) {
        debug!("simulator init");
        self.cpu = Cpu::new(&self.config);
        self.cpu.cache.set_mapping_mode(MappingMode::DirectMapped);
        self.program.clear();
        self.state.clear();
        self.stats = SimStats::default();
        self.explanation_mode = false;
    }

    /// Restores registers and memory, invalidates the cache, and rewinds the program.
    ///
    /// The program itself, the mapping mode, and the explanation mode are kept.
    pub fn reset(&mut self) {
        debug!("simulator reset");
        self.cpu.reset();
        self.program.rewind();
        self.state.clear();
        self.stats = SimStats::default();
    }

    /// Loads the seven-line sample program.
    pub fn load_default_program(&mut self) {
        let _ = self.set_program(DEFAULT_PROGRAM);
    }

    /// Replaces the program and rewinds the cursor.
    ///
    /// Lines past the configured capacity are dropped. Each line is decoded once here.
    ///
    /// # Returns
    ///
    /// The number of lines kept.
    pub fn set_program<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept = self.program.load(lines);
        debug!(lines = kept, "program loaded");
        kept
    }

    /// Number of program lines.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Raw text of program line `idx`, or `""` when out of range or negative.
    pub fn instruction_at(&self, idx: impl TryInto<usize>) -> &str {
        idx.try_into().map_or("", |idx| self.program.raw(idx))
    }

    /// Index of the next line to execute.
    pub const fn cursor(&self) -> usize {
        self.program.cursor()
    }

    /// The loaded program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Executes the instruction at the cursor.
    ///
    /// Never fails. Rejected lines still consume their slot, and stepping past the
    /// end reports `ProgramExhausted` without touching cycles, registers, memory,
    /// or the cache.
    pub fn step(&mut self) -> StepResult {
        let result = match self.program.fetch() {
            None => StepResult::exhausted(),
            Some(line) => match line.decoded().clone() {
                Ok(inst) => self.cpu.execute(inst),
                Err(err) => StepResult::undecodable(err),
            },
        };

        self.state.record(&result);
        self.stats.record(&result);
        if self.config.general.trace_steps {
            info!(
                cursor = self.program.cursor(),
                cycles = self.state.total_cycles(),
                "{result}"
            );
        }
        result
    }

    /// Steps until the program is exhausted or `limit` steps have run.
    ///
    /// # Returns
    ///
    /// The result of every step taken. The exhaustion result itself is not included.
    pub fn run_to_end(&mut self, limit: usize) -> Vec<StepResult> {
        let mut results = Vec::new();
        while results.len() < limit && !self.program.is_exhausted() {
            results.push(self.step());
        }
        results
    }

    /// Registers rendered as `R1=0, R2=0, R3=0, R4=0`.
    pub fn registers_summary(&self) -> String {
        self.cpu.regs.summary()
    }

    /// Sets a register by name. Unknown names are ignored.
    pub fn set_register(&mut self, name: &str, value: Word) {
        let _ = self.cpu.regs.set_named(name, value);
    }

    /// Current value of `reg`.
    pub const fn register(&self, reg: Register) -> Word {
        self.cpu.regs.get(reg)
    }

    /// Memory rendered as `[0]: 0,[1]: 10,...`.
    pub fn memory_summary(&self) -> String {
        self.cpu.memory.summary()
    }

    /// Number of memory cells.
    pub fn memory_size(&self) -> usize {
        self.cpu.memory.cells().len()
    }

    /// Writes a memory cell directly, bypassing the cache. Ignored out of range.
    pub fn set_memory_cell(&mut self, addr: i64, value: Word) {
        let _ = self.cpu.memory.poke(addr, value);
    }

    /// Reads a memory cell directly, or 0 out of range.
    pub fn memory_cell(&self, addr: i64) -> Word {
        self.cpu.memory.peek(addr)
    }

    /// Whether explanation mode is on. It never affects computation.
    pub const fn explanation_mode(&self) -> bool {
        self.explanation_mode
    }

    /// Turns explanation mode on or off.
    pub const fn set_explanation_mode(&mut self, on: bool) {
        self.explanation_mode = on;
    }

    /// Operation text of the most recent step.
    pub fn last_operation_text(&self) -> &str {
        self.state.last_operation()
    }

    /// Explanation text of the most recent step.
    pub fn last_explanation_text(&self) -> &str {
        self.state.last_explanation()
    }

    /// The history, each entry followed by a newline.
    pub fn history_log(&self) -> String {
        self.state.history_log()
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    /// Drops every history entry.
    pub fn clear_history(&mut self) {
        self.state.clear_history();
    }

    /// Cycles charged since the last reset.
    pub const fn total_cycles(&self) -> u64 {
        self.state.total_cycles()
    }

    /// Cycles charged by the most recent step.
    pub const fn last_instruction_cost(&self) -> u64 {
        self.state.last_cost()
    }

    /// Number of cache lines.
    pub fn cache_line_count(&self) -> usize {
        self.cpu.cache.line_count()
    }

    /// Cache `(hits, misses)` since the last invalidation.
    pub const fn cache_hit_miss_counts(&self) -> (u64, u64) {
        (self.cpu.cache.hits(), self.cpu.cache.misses())
    }

    /// Line `idx` rendered as `V=1 T=5 D=50`, or [`INVALID_LINE`].
    pub fn cache_line_summary(&self, idx: impl TryInto<usize>) -> String {
        idx.try_into()
            .ok()
            .and_then(|idx| self.cpu.cache.line_summary(idx))
            .unwrap_or_else(|| INVALID_LINE.to_string())
    }

    /// Overwrites the data of line `idx` without touching its tag or counters.
    /// Negative or out-of-range indices are ignored.
    pub fn force_set_cache_line_data(&mut self, idx: impl TryInto<usize>, value: Word) {
        if let Ok(idx) = idx.try_into() {
            let _ = self.cpu.cache.force_line_data(idx, value);
        }
    }

    /// Switches the placement policy. Always invalidates the cache.
    pub fn set_cache_mapping_mode(&mut self, mode: MappingMode) {
        self.cpu.cache.set_mapping_mode(mode);
    }

    /// Switches the placement policy from its integer code (1 is associative,
    /// anything else direct-mapped).
    pub fn set_cache_mapping_mode_raw(&mut self, raw: i64) {
        self.set_cache_mapping_mode(MappingMode::from_raw(raw));
    }

    /// Current placement policy.
    pub const fn cache_mapping_mode(&self) -> MappingMode {
        self.cpu.cache.mapping_mode()
    }

    /// Statistics since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
