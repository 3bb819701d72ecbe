//! Execution state carried between steps: cycle totals, the texts of the last step,
//! and the append-only history log.

use crate::core::StepResult;

/// Cycle accounting and observable texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    total_cycles: u64,
    last_cost: u64,
    last_operation: String,
    last_explanation: String,
    history: Vec<String>,
}

impl ExecutionState {
    /// Creates a cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one step into the state.
    ///
    /// The cost is added to the total, both texts replace the previous ones, and
    /// the operation text is appended to the history unless it is empty.
    pub fn record(&mut self, result: &StepResult) {
        self.total_cycles = self.total_cycles.saturating_add(result.cost);
        self.last_cost = result.cost;
        self.last_operation.clone_from(&result.operation);
        self.last_explanation.clone_from(&result.explanation);
        if !result.operation.is_empty() {
            self.history.push(result.operation.clone());
        }
    }

    /// Clears cycles, texts, and history.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drops every history entry.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Total cycles charged since the last reset.
    pub const fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Cost of the most recent step.
    pub const fn last_cost(&self) -> u64 {
        self.last_cost
    }

    /// Operation text of the most recent step.
    pub fn last_operation(&self) -> &str {
        &self.last_operation
    }

    /// Explanation text of the most recent step.
    pub fn last_explanation(&self) -> &str {
        &self.last_explanation
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History rendered as one string, each entry followed by a newline.
    pub fn history_log(&self) -> String {
        self.history.iter().fold(String::new(), |mut log, entry| {
            log.push_str(entry);
            log.push('\n');
            log
        })
    }
}
