//! One-Word-Line Cache Simulator.
//!
//! This module implements the cache that sits in front of main memory. It supports
//! two placement policies selected at runtime:
//! 1. **Direct-mapped:** address `a` lives only in line `a mod lines`; a miss
//!    overwrites whatever that line held.
//! 2. **Fully associative:** any line may hold any address; a miss fills the first
//!    invalid line, otherwise the least recently used one.
//!
//! Every line holds exactly one memory word, and the line's tag is the full word
//! address. Stores are write-through: memory is updated on every store and lines
//! carry no dirty state. Hit and miss counters are cumulative since the last full
//! invalidation.

/// Cache replacement policy implementations (LRU).
pub mod policies;

use tracing::trace;

use self::policies::LruPolicy;
use crate::common::{AccessError, Address, Word};
use crate::config::{CacheConfig, MappingMode};
use crate::soc::traits::WordStore;

/// A single cache line.
///
/// An invalid line always has no tag and never matches a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheLine {
    valid: bool,
    tag: Option<Address>,
    data: Word,
    last_use: u64,
}

impl CacheLine {
    /// Returns `true` if the line holds a memory word.
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// Returns the address held by the line, or `None` when invalid.
    pub const fn tag(&self) -> Option<Address> {
        self.tag
    }

    /// Returns the cached word.
    pub const fn data(&self) -> Word {
        self.data
    }

    /// Returns the use stamp of the most recent access (0 if never touched).
    pub const fn last_use(&self) -> u64 {
        self.last_use
    }

    /// Returns `true` if this line is a valid copy of `addr`.
    #[inline]
    fn holds(&self, addr: Address) -> bool {
        self.valid && self.tag == Some(addr)
    }

    /// Installs `data` for `addr`.
    fn fill(&mut self, addr: Address, data: Word) {
        self.valid = true;
        self.tag = Some(addr);
        self.data = data;
    }

    /// Renders `V=1 T=5 D=50` (`T=-` when no tag is held).
    pub fn summary(&self) -> String {
        let tag = self
            .tag
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        format!("V={} T={} D={}", u8::from(self.valid), tag, self.data)
    }
}

/// Result of one cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Index of the line that served the access.
    pub line: usize,
    /// Whether the lookup found the address already resident.
    pub hit: bool,
    /// The word in the line after the access completed.
    pub data: Word,
}

/// The simulated cache.
#[derive(Debug, Clone)]
pub struct Cache {
    lines: Vec<CacheLine>,
    mode: MappingMode,
    lru: LruPolicy,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Cache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    ///
    /// * `config` - Number of lines and initial mapping mode. A zero line count
    ///   is raised to one so that placement arithmetic stays defined.
    pub fn new(config: &CacheConfig) -> Self {
        let lines = config.lines.max(1);
        Self {
            lines: vec![CacheLine::default(); lines],
            mode: config.mapping,
            lru: LruPolicy::new(),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Looks up `addr`, filling a line from `mem` on a miss.
    ///
    /// In direct-mapped mode the line is forced by the address. In associative mode
    /// a hit is any valid line tagged `addr`; on a miss the victim comes from the LRU
    /// policy. Either way the served line is stamped as most recently used and the
    /// hit or miss counter is incremented.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address to access.
    /// * `mem` - Backing store consulted on a miss.
    ///
    /// # Returns
    ///
    /// The serving line, the hit flag, and the word now in the line.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr` is outside `mem`. No line,
    /// counter, or use stamp is modified in that case.
    pub fn lookup_or_load<M>(&mut self, addr: Address, mem: &M) -> Result<Access, AccessError>
    where
        M: WordStore + ?Sized,
    {
        let cell = mem.check(addr)?;

        let (line, hit) = match self.mode {
            MappingMode::DirectMapped => {
                let line = cell % self.lines.len();
                (line, self.lines[line].holds(addr))
            }
            MappingMode::Associative => self
                .lines
                .iter()
                .position(|l| l.holds(addr))
                .map_or_else(|| (self.lru.victim(&self.lines), false), |line| (line, true)),
        };

        if !hit {
            let data = mem.read(addr)?;
            let slot = &mut self.lines[line];
            if slot.valid {
                self.evictions += 1;
                trace!(line, evicted = ?slot.tag, addr, "evicting cache line");
            }
            slot.fill(addr, data);
        }

        self.lru.touch(&mut self.lines[line]);
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }

        trace!(addr, line, hit, mode = ?self.mode, "cache access");

        Ok(Access {
            line,
            hit,
            data: self.lines[line].data,
        })
    }

    /// Writes `val` to `addr` through the cache.
    ///
    /// Performs [`Cache::lookup_or_load`] and then writes the value into both the
    /// serving line and `mem`. The reported hit flag is that of the lookup, even
    /// though a missed line is overwritten immediately afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AddressOutOfRange`] if `addr` is outside `mem`; nothing
    /// is modified.
    pub fn store<M>(&mut self, addr: Address, val: Word, mem: &mut M) -> Result<Access, AccessError>
    where
        M: WordStore + ?Sized,
    {
        let access = self.lookup_or_load(addr, &*mem)?;
        self.lines[access.line].data = val;
        mem.write(addr, val)?;
        Ok(Access { data: val, ..access })
    }

    /// Returns `true` if `addr` is resident. Does not count as an access.
    pub fn contains(&self, addr: Address) -> bool {
        self.lines.iter().any(|l| l.holds(addr))
    }

    /// Invalidates every line and zeroes the counters and the use clock.
    pub fn invalidate_all(&mut self) {
        self.lines.fill(CacheLine::default());
        self.lru.reset();
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }

    /// Selects the placement policy. Always invalidates the whole cache, even when
    /// `mode` equals the current one.
    pub fn set_mapping_mode(&mut self, mode: MappingMode) {
        self.mode = mode;
        self.invalidate_all();
    }

    /// Returns the current placement policy.
    pub const fn mapping_mode(&self) -> MappingMode {
        self.mode
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines in index order.
    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    /// Returns the line at `idx`, if any.
    pub fn line(&self, idx: usize) -> Option<&CacheLine> {
        self.lines.get(idx)
    }

    /// Renders the line at `idx`, or `None` for an out-of-range index.
    pub fn line_summary(&self, idx: usize) -> Option<String> {
        self.line(idx).map(CacheLine::summary)
    }

    /// Overwrites a line's data without touching validity, tag, stamps, or counters.
    ///
    /// This is a debugging hook for the visualizer; it lets the cache and memory
    /// disagree on purpose.
    ///
    /// # Returns
    ///
    /// `false` if `idx` is out of range.
    pub fn force_line_data(&mut self, idx: usize, val: Word) -> bool {
        self.lines.get_mut(idx).is_some_and(|line| {
            line.data = val;
            true
        })
    }

    /// Hits since the last invalidation.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Misses since the last invalidation.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Misses that replaced a valid line since the last invalidation.
    pub const fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Most recent use stamp handed out.
    pub const fn use_clock(&self) -> u64 {
        self.lru.clock()
    }
}
