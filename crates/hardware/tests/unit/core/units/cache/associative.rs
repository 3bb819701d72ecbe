//! Fully associative placement with LRU replacement.

use cachesim_core::config::{CacheConfig, MappingMode};
use cachesim_core::core::units::cache::Cache;
use cachesim_core::core::units::cache::policies::LruPolicy;

use crate::common::mocks::memory::CountingMemory;

fn assoc_cache() -> Cache {
    Cache::new(&CacheConfig {
        lines: 4,
        mapping: MappingMode::Associative,
    })
}

/// Accesses 0, 1, 2, 3, 4: the fifth access evicts address 0.
fn filled_past_capacity(mem: &CountingMemory) -> Cache {
    let mut cache = assoc_cache();
    for addr in 0..5 {
        assert!(!cache.lookup_or_load(addr, mem).unwrap().hit);
    }
    cache
}

#[test]
fn fills_invalid_lines_in_order() {
    let mut cache = assoc_cache();
    let mem = CountingMemory::new(10);

    let lines: Vec<usize> = [9, 3, 6, 0]
        .into_iter()
        .map(|addr| cache.lookup_or_load(addr, &mem).unwrap().line)
        .collect();
    assert_eq!(lines, vec![0, 1, 2, 3]);
    assert_eq!(cache.evictions(), 0);
}

#[test]
fn fifth_address_evicts_least_recent() {
    let mem = CountingMemory::new(10);
    let cache = filled_past_capacity(&mem);

    assert!(!cache.contains(0));
    for addr in 1..5 {
        assert!(cache.contains(addr));
    }
    assert_eq!(cache.evictions(), 1);
    assert_eq!(cache.line(0).unwrap().tag(), Some(4));
}

#[test]
fn newest_address_hits_after_eviction() {
    let mem = CountingMemory::new(10);
    let mut cache = filled_past_capacity(&mem);
    assert!(cache.lookup_or_load(4, &mem).unwrap().hit);
}

#[test]
fn evicted_address_misses_after_eviction() {
    let mem = CountingMemory::new(10);
    let mut cache = filled_past_capacity(&mem);
    let access = cache.lookup_or_load(0, &mem).unwrap();
    assert!(!access.hit);
    assert_eq!(access.data, 0);
    assert!(!cache.contains(1), "address 1 was the least recent");
}

#[test]
fn hit_refreshes_recency() {
    let mut cache = assoc_cache();
    let mem = CountingMemory::new(10);
    for addr in 0..4 {
        let _ = cache.lookup_or_load(addr, &mem).unwrap();
    }

    assert!(cache.lookup_or_load(0, &mem).unwrap().hit);
    let _ = cache.lookup_or_load(4, &mem).unwrap();

    assert!(cache.contains(0));
    assert!(!cache.contains(1));
}

#[test]
fn use_stamps_strictly_increase() {
    let mut cache = assoc_cache();
    let mem = CountingMemory::new(10);
    let mut last = 0;
    for addr in [0, 1, 0, 2, 2, 3] {
        let access = cache.lookup_or_load(addr, &mem).unwrap();
        let stamp = cache.line(access.line).unwrap().last_use();
        assert!(stamp > last);
        last = stamp;
    }
    assert_eq!(cache.use_clock(), 6);
}

#[test]
fn lru_victim_prefers_first_invalid_line() {
    let policy = LruPolicy::new();
    let cache = assoc_cache();
    assert_eq!(policy.victim(cache.lines()), 0);
    assert_eq!(policy.victim(&[]), 0);
}
