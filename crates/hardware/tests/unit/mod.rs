//! # Unit Components
//!
//! This module groups the unit tests by simulator component: shared types,
//! configuration, the CPU and its execution units, the ISA text layer, the
//! simulator session, main memory, and statistics.


/// Configuration defaults, JSON parsing, and validation.
pub mod config;



/// Simulator session, program container, and loader.
pub mod sim;
