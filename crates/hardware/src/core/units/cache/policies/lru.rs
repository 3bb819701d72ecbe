//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest time.
//! Instead of a usage stack it keeps a single global use clock: every access stamps
//! the touched line with the next clock value, and the victim is the line holding
//! the smallest stamp. An invalid line is always preferred over evicting a valid one.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(L) where L is the number of lines
//! - **Space Complexity:** O(1) beyond the per-line stamp
//! - **Best Case:** Working sets no larger than the cache
//! - **Worst Case:** Cyclic scans one address larger than the cache (every access misses)

use crate::core::units::cache::CacheLine;

/// LRU policy state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LruPolicy {
    /// Last stamp handed out. Only `reset` moves it backwards.
    clock: u64,
}

impl LruPolicy {
    /// Creates a policy with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent stamp handed out.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Stamps `line` as the most recently used.
    ///
    /// The stamp is strictly greater than every stamp issued before it since the
    /// last [`LruPolicy::reset`].
    pub const fn touch(&mut self, line: &mut CacheLine) {
        self.clock += 1;
        line.last_use = self.clock;
    }

    /// Identifies the line to replace on a miss.
    ///
    /// Returns the first invalid line in index order if there is one; otherwise the
    /// line with the smallest use stamp, choosing the lowest index among equal stamps.
    /// Returns 0 for an empty slice.
    pub fn victim(&self, lines: &[CacheLine]) -> usize {
        if let Some(free) = lines.iter().position(|l| !l.valid) {
            return free;
        }
        lines
            .iter()
            .enumerate()
            .min_by_key(|(i, l)| (l.last_use, *i))
            .map_or(0, |(i, _)| i)
    }

    /// Rewinds the clock; used when the whole cache is invalidated.
    pub const fn reset(&mut self) {
        self.clock = 0;
    }
}
