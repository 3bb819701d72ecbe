//! Simulator Python binding.
//!
//! Exposes one simulator session to Python: create from an optional config dict, load a
//! program, step it, and read back registers, memory, cache lines, texts, and cycles.
//! Method names follow the host interface of the visualizer.

use cachesim_core::Simulator;
use cachesim_core::common::Register;
use cachesim_core::sim::loader;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::conversion::{load_err, py_dict_to_config};
use crate::stats::PyStats;
use crate::step::PyStepResult;

/// Python-exposed simulator session.
#[pyclass(name = "Simulator")]
#[derive(Debug)]
pub struct PySimulator {
    pub inner: Simulator,
}

#[pymethods]
impl PySimulator {
    /// Creates a session from an optional config dict (defaults when omitted).
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => cachesim_core::Config::default(),
        };
        Ok(Self {
            inner: Simulator::new(config),
        })
    }

    /// Restores the initial state and clears the program.
    fn init(&mut self) {
        self.inner.init();
    }

    /// Restores registers and memory and rewinds the program.
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn load_default_program(&mut self) {
        self.inner.load_default_program();
    }

    /// Replaces the program. Returns the number of lines kept.
    fn set_program(&mut self, lines: Vec<String>) -> usize {
        self.inner.set_program(lines)
    }

    /// Loads a program text file. Returns the number of lines kept.
    ///
    /// # Errors
    ///
    /// Raises `OSError` if the file cannot be read.
    fn load_program_file(&mut self, path: &str) -> PyResult<usize> {
        let lines = loader::load_program_file(path).map_err(load_err)?;
        Ok(self.inner.set_program(lines))
    }

    fn program_len(&self) -> usize {
        self.inner.program_len()
    }

    /// Returns `""` for a negative or out-of-range index.
    fn instruction_at(&self, idx: i64) -> String {
        self.inner.instruction_at(idx).to_string()
    }

    fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    /// Executes the instruction at the cursor.
    fn step(&mut self) -> PyStepResult {
        PyStepResult::from(self.inner.step())
    }

    /// Steps until the program ends or `limit` steps have run.
    #[pyo3(signature = (limit=100))]
    fn run_to_end(&mut self, limit: usize) -> Vec<PyStepResult> {
        self.inner
            .run_to_end(limit)
            .into_iter()
            .map(PyStepResult::from)
            .collect()
    }

    fn registers_summary(&self) -> String {
        self.inner.registers_summary()
    }

    /// Sets a register by name (`"R1"`..`"R4"`). Unknown names are ignored.
    fn set_register(&mut self, name: &str, value: i64) {
        self.inner.set_register(name, value);
    }

    /// Reads a register by name.
    ///
    /// # Errors
    ///
    /// Raises `ValueError` for a name other than `"R1"`..`"R4"`.
    fn register(&self, name: &str) -> PyResult<i64> {
        let reg = name
            .parse::<Register>()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(self.inner.register(reg))
    }

    fn memory_summary(&self) -> String {
        self.inner.memory_summary()
    }

    fn memory_size(&self) -> usize {
        self.inner.memory_size()
    }

    fn set_memory_cell(&mut self, addr: i64, value: i64) {
        self.inner.set_memory_cell(addr, value);
    }

    fn memory_cell(&self, addr: i64) -> i64 {
        self.inner.memory_cell(addr)
    }

    fn explanation_mode(&self) -> bool {
        self.inner.explanation_mode()
    }

    fn set_explanation_mode(&mut self, on: bool) {
        self.inner.set_explanation_mode(on);
    }

    fn last_operation_text(&self) -> String {
        self.inner.last_operation_text().to_string()
    }

    fn last_explanation_text(&self) -> String {
        self.inner.last_explanation_text().to_string()
    }

    fn history_log(&self) -> String {
        self.inner.history_log()
    }

    fn history(&self) -> Vec<String> {
        self.inner.history().to_vec()
    }

    fn clear_history(&mut self) {
        self.inner.clear_history();
    }

    fn total_cycles(&self) -> u64 {
        self.inner.total_cycles()
    }

    fn last_instruction_cost(&self) -> u64 {
        self.inner.last_instruction_cost()
    }

    fn cache_line_count(&self) -> usize {
        self.inner.cache_line_count()
    }

    /// Returns `(hits, misses)`.
    fn cache_hit_miss_counts(&self) -> (u64, u64) {
        self.inner.cache_hit_miss_counts()
    }

    /// Returns "Invalid line" for a negative or out-of-range index.
    fn cache_line_summary(&self, idx: i64) -> String {
        self.inner.cache_line_summary(idx)
    }

    fn force_set_cache_line_data(&mut self, idx: i64, value: i64) {
        self.inner.force_set_cache_line_data(idx, value);
    }

    /// Sets the mapping mode: 0 direct-mapped, 1 associative (other values direct-mapped).
    fn set_cache_mapping_mode(&mut self, mode: i64) {
        self.inner.set_cache_mapping_mode_raw(mode);
    }

    /// Returns the mapping mode as 0 (direct-mapped) or 1 (associative).
    fn cache_mapping_mode(&self) -> i64 {
        self.inner.cache_mapping_mode().as_raw()
    }

    /// Returns a snapshot of the session statistics.
    fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.stats().clone())
    }
}
