//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the engine.
//! It provides:
//! 1. **Defaults:** The classic teaching setup (10 memory cells, 4 cache lines, 5/10/2 cycle costs).
//! 2. **Structures:** Grouped config for general, memory, cache, timing, and program settings.
//! 3. **Enums:** The cache mapping mode.
//!
//! Configuration is supplied as JSON (from the CLI `--config` flag or a Python dict) or
//! built with `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of main memory cells.
    pub const MEMORY_SIZE: usize = 10;

    /// Initial value multiplier: cell `i` starts at `i * MEMORY_INIT_STRIDE`.
    pub const MEMORY_INIT_STRIDE: i64 = 10;

    /// Number of cache lines.
    pub const CACHE_LINES: usize = 4;

    /// Cycles charged for a LOAD/STORE that hits the cache.
    pub const HIT_CYCLES: u64 = 5;

    /// Cycles charged for a LOAD/STORE that misses the cache.
    pub const MISS_CYCLES: u64 = 10;

    /// Cycles charged for ADD/SUB.
    pub const ALU_CYCLES: u64 = 2;

    /// Maximum number of program lines kept; longer programs are truncated.
    pub const MAX_INSTRUCTIONS: usize = 100;
}

/// Cache placement policy.
///
/// The numeric form (`0`, `1`) is what the visualizer stores; see
/// [`MappingMode::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MappingMode {
    /// Each address maps to exactly one line (`addr mod lines`).
    #[default]
    #[serde(alias = "Direct", alias = "direct", alias = "direct-mapped")]
    DirectMapped,
    /// Any line may hold any address; victims chosen by LRU.
    #[serde(alias = "associative", alias = "FullyAssociative")]
    Associative,
}

impl MappingMode {
    /// Converts the host's integer encoding; anything other than `1` is direct-mapped.
    pub const fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            Self::Associative
        } else {
            Self::DirectMapped
        }
    }

    /// Returns the host's integer encoding.
    pub const fn as_raw(self) -> i64 {
        match self {
            Self::DirectMapped => 0,
            Self::Associative => 1,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{Config, MappingMode};
///
/// let json = r#"{
///     "cache": { "lines": 8, "mapping": "Associative" },
///     "timing": { "miss_cycles": 20 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cache.lines, 8);
/// assert_eq!(config.cache.mapping, MappingMode::Associative);
/// assert_eq!(config.timing.miss_cycles, 20);
/// assert_eq!(config.timing.hit_cycles, 5);
/// assert_eq!(config.memory.size, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation and logging settings.
    pub general: GeneralConfig,
    /// Main memory geometry.
    pub memory: MemoryConfig,
    /// Cache geometry and placement.
    pub cache: CacheConfig,
    /// Per-instruction cycle costs.
    pub timing: TimingConfig,
    /// Program limits.
    pub program: ProgramConfig,
}

impl Config {
    /// Parses a JSON document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Zero`]
    /// when a size field is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that every size is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Zero`] naming the first zero-sized field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.size == 0 {
            return Err(ConfigError::Zero {
                field: "memory.size",
            });
        }
        if self.cache.lines == 0 {
            return Err(ConfigError::Zero {
                field: "cache.lines",
            });
        }
        if self.program.max_instructions == 0 {
            return Err(ConfigError::Zero {
                field: "program.max_instructions",
            });
        }
        Ok(())
    }
}

/// Presentation settings that never influence simulated state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial value of the explanation-mode flag handed back to the host.
    pub explanation_mode: bool,
    /// Emit one `info` event per executed step (in addition to the `debug` stream).
    pub trace_steps: bool,
}

/// Main memory settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of cells.
    pub size: usize,
    /// Cell `i` is initialized to `i * init_stride`.
    pub init_stride: i64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            init_stride: defaults::MEMORY_INIT_STRIDE,
        }
    }
}

/// Cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of one-word lines.
    pub lines: usize,
    /// Placement policy in effect after `init`.
    pub mapping: MappingMode,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            lines: defaults::CACHE_LINES,
            mapping: MappingMode::default(),
        }
    }
}

/// Cycle costs charged per instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// LOAD/STORE whose cache lookup hit.
    pub hit_cycles: u64,
    /// LOAD/STORE whose cache lookup missed.
    pub miss_cycles: u64,
    /// ADD/SUB.
    pub alu_cycles: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hit_cycles: defaults::HIT_CYCLES,
            miss_cycles: defaults::MISS_CYCLES,
            alu_cycles: defaults::ALU_CYCLES,
        }
    }
}

impl TimingConfig {
    /// Cost of a memory instruction given the hit/miss outcome of its lookup.
    #[inline]
    pub const fn memory_cycles(&self, hit: bool) -> u64 {
        if hit { self.hit_cycles } else { self.miss_cycles }
    }
}

/// Program settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Maximum number of lines kept when a program is loaded.
    pub max_instructions: usize,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            max_instructions: defaults::MAX_INSTRUCTIONS,
        }
    }
}
