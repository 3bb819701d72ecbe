//! Simulation driver and program loading.
//!
//! Provides the [`Simulator`] session that sequences a program over the CPU, plus
//! the program container, per-session execution state, and the program file loader.

pub mod loader;
pub mod program;
pub mod simulator;
pub mod state;

pub use program::{DEFAULT_PROGRAM, Program, ProgramLine};
pub use simulator::Simulator;
pub use state::ExecutionState;
