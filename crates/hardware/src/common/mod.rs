//! Common types shared by every part of the simulator.
//!
//! This module provides the building blocks used across the engine. It includes:
//! 1. **Error Handling:** Access, decode, step, configuration, and loader errors.
//! 2. **Register Management:** Register names and the four-entry register file.

/// Error types and the address/word aliases.
pub mod error;

/// Register names and register file.
pub mod reg;

pub use error::{AccessError, Address, ConfigError, DecodeError, LoadError, StepError, Word};
pub use reg::{Register, RegisterFile, UnknownRegister};
