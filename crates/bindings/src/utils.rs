//! Utility functions exposed to Python.
//!
//! Provides version, disassembly, and logging helpers for the `cachesim` module.

use cachesim_core::isa;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the simulator version string (e.g., for scripting or diagnostics).
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Decodes one line of program text and renders it in canonical form.
///
/// # Returns
///
/// A string such as `"ADD R3, R1, R2"`, or the decode error message for a
/// malformed or unknown instruction.
#[pyfunction]
pub fn disassemble(line: &str) -> String {
    isa::decode(line).map_or_else(|e| e.to_string(), |inst| isa::disassemble(&inst))
}

/// Installs a stderr `tracing` subscriber filtered by `filter` (or `RUST_LOG`).
///
/// Returns `False` if a subscriber was already installed.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> bool {
    let filter = filter.map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
