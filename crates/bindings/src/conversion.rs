//! Python↔Rust conversion helpers.
//!
//! Converts Python dicts into the core `Config` type via JSON serialization, so the same
//! schema is used from both Python and the CLI, and maps core errors onto Python exceptions.

use cachesim_core::common::{ConfigError, LoadError};
use cachesim_core::config::Config;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

/// Converts a Python dict to a validated simulator `Config`.
///
/// The dict is serialized to JSON and then deserialized into `Config`. Keys must match
/// the Rust config structure (`general`, `memory`, `cache`, `timing`, `program`); any
/// key left out takes its default.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict such as `{"cache": {"mapping": "associative"}}`.
///
/// # Errors
///
/// Returns `ValueError` if the dict does not match the schema or fails validation.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((dict,))?.extract()?;

    Config::from_json(&json_str).map_err(config_err)
}

/// Maps a configuration error onto `ValueError` (or `OSError` for unreadable files).
pub fn config_err(err: ConfigError) -> PyErr {
    match err {
        ConfigError::Io { .. } => PyIOError::new_err(err.to_string()),
        ConfigError::Parse(_) | ConfigError::Zero { .. } => PyValueError::new_err(err.to_string()),
    }
}

/// Maps a program loading error onto `OSError`.
pub fn load_err(err: LoadError) -> PyErr {
    PyIOError::new_err(err.to_string())
}
