//! Statistics Python binding.
//!
//! Exposes session statistics to Python: getters for cycles, instruction mix, outcomes,
//! and cache hits/misses; `print` / `print_sections` for human-readable output; `to_dict`
//! for JSON-serializable export (plotting the cost profile, scripting).

use cachesim_core::stats::SimStats;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-exposed statistics: wraps `SimStats` for read and print from Python.
#[pyclass(name = "Stats")]
#[derive(Debug, Clone)]
pub struct PyStats {
    pub inner: SimStats,
}

#[pymethods]
impl PyStats {
    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "instruction_mix", "outcomes",
    /// "memory", "profile". Pass an empty list for a full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    #[getter]
    fn cycles(&self) -> u64 {
        self.inner.cycles
    }
    #[getter]
    fn steps(&self) -> u64 {
        self.inner.steps
    }
    #[getter]
    fn inst_load(&self) -> u64 {
        self.inner.inst_load
    }
    #[getter]
    fn inst_store(&self) -> u64 {
        self.inner.inst_store
    }
    #[getter]
    fn inst_alu(&self) -> u64 {
        self.inner.inst_alu
    }
    #[getter]
    fn cache_hits(&self) -> u64 {
        self.inner.cache_hits
    }
    #[getter]
    fn cache_misses(&self) -> u64 {
        self.inner.cache_misses
    }
    #[getter]
    fn hit_rate(&self) -> f64 {
        self.inner.hit_rate()
    }

    /// Cost profile as a list of `(mnemonic, cycles)` pairs.
    #[getter]
    fn cost_profile(&self) -> Vec<(&'static str, u64)> {
        self.inner
            .cost_profile
            .iter()
            .map(|s| (s.label, s.cycles))
            .collect()
    }

    /// Export all stats as a Python dict (JSON-serializable).
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        let s = &self.inner;
        d.set_item("cycles", s.cycles)?;
        d.set_item("steps", s.steps)?;
        d.set_item("inst_load", s.inst_load)?;
        d.set_item("inst_store", s.inst_store)?;
        d.set_item("inst_alu", s.inst_alu)?;
        d.set_item("rejected_address", s.rejected_address)?;
        d.set_item("rejected_invalid", s.rejected_invalid)?;
        d.set_item("rejected_unrecognized", s.rejected_unrecognized)?;
        d.set_item("exhausted_polls", s.exhausted_polls)?;
        d.set_item("cache_hits", s.cache_hits)?;
        d.set_item("cache_misses", s.cache_misses)?;
        d.set_item("hit_rate", s.hit_rate())?;
        d.set_item("cost_profile", self.cost_profile())?;
        Ok(d)
    }
}

impl From<SimStats> for PyStats {
    fn from(inner: SimStats) -> Self {
        Self { inner }
    }
}
