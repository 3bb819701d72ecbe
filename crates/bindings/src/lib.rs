//! Python bindings for the cache simulator.
//!
//! This crate exposes the simulator to Python via PyO3. It provides:
//! 1. **Session:** `Simulator` for loading programs, stepping, and introspection.
//! 2. **Results:** `StepResult` for the outcome, texts, and cost of each step.
//! 3. **Statistics:** `Stats` for counters, the cost profile, and section printing.
//! 4. **Utilities:** Version string, disassembly, logging setup, and conversion helpers.

use pyo3::prelude::*;

/// Python dict to Rust `Config` conversion and error mapping.
pub mod conversion;
/// Simulator binding (`PySimulator`).
pub mod simulator;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Step result binding (`PyStepResult`).
pub mod step;
/// Utility functions (version, disassembly, logging).
pub mod utils;

/// Registers all classes and functions onto the given Python module.
///
/// # Errors
///
/// Returns a `PyErr` if registration fails.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<simulator::PySimulator>()?;
    m.add_class::<step::PyStepResult>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::disassemble, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn cachesim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_module(m)
}
