//! Program Loader.
//!
//! This module reads program text for the simulator. It performs:
//! 1. **File loading:** Reads a program file from disk, surfacing I/O failures as
//!    [`LoadError`].
//! 2. **Text parsing:** Splits program text into instruction lines, dropping blank
//!    lines and full-line comments (`#` or `;`).
//!
//! Lines are returned verbatim (trimmed); decoding happens when the lines are handed
//! to [`crate::sim::Simulator::set_program`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;

/// Loads a program file from disk.
///
/// # Arguments
///
/// * `path` - Path to the program text file.
///
/// # Returns
///
/// The instruction lines of the file, in order.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = parse_program(&text);
    debug!(path = %path.display(), lines = lines.len(), "loaded program file");
    Ok(lines)
}

/// Splits program text into instruction lines.
///
/// ```
/// use cachesim_core::sim::loader::parse_program;
///
/// let lines = parse_program("# sum\nLOAD R1, 5\n\n; store\nSTORE R1, 2\n");
/// assert_eq!(lines, vec!["LOAD R1, 5", "STORE R1, 2"]);
/// ```
pub fn parse_program(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line))
        .map(ToString::to_string)
        .collect()
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}
