//! Step result Python binding.

use cachesim_core::core::{StepOutcome, StepResult};
use pyo3::prelude::*;

/// Python-exposed result of one step.
#[pyclass(name = "StepResult", frozen)]
#[derive(Debug, Clone)]
pub struct PyStepResult {
    pub inner: StepResult,
}

#[pymethods]
impl PyStepResult {
    /// Outcome kind: `"memory"`, `"arithmetic"`, `"rejected"`, or `"exhausted"`.
    #[getter]
    fn kind(&self) -> &'static str {
        match self.inner.outcome {
            StepOutcome::MemoryAccess { .. } => "memory",
            StepOutcome::Arithmetic => "arithmetic",
            StepOutcome::Rejected(_) => "rejected",
            StepOutcome::ProgramExhausted => "exhausted",
        }
    }

    /// Cache hit flag for completed LOAD/STORE, else `None`.
    #[getter]
    fn hit(&self) -> Option<bool> {
        self.inner.outcome.hit()
    }

    /// Rejection reason, else `None`.
    #[getter]
    fn error(&self) -> Option<String> {
        self.inner.outcome.error().map(ToString::to_string)
    }

    #[getter]
    fn operation(&self) -> String {
        self.inner.operation.clone()
    }

    #[getter]
    fn explanation(&self) -> String {
        self.inner.explanation.clone()
    }

    #[getter]
    fn cost(&self) -> u64 {
        self.inner.cost
    }

    fn __repr__(&self) -> String {
        format!(
            "StepResult(kind={:?}, operation={:?}, cost={})",
            self.kind(),
            self.inner.operation,
            self.inner.cost
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

impl From<StepResult> for PyStepResult {
    fn from(inner: StepResult) -> Self {
        Self { inner }
    }
}
