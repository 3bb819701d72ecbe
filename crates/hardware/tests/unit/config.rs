//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, and validation.

use std::io::Write;

use cachesim_core::common::ConfigError;
use cachesim_core::config::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.explanation_mode);
    assert!(!config.general.trace_steps);
    assert_eq!(config.memory.size, 10);
    assert_eq!(config.memory.init_stride, 10);
    assert_eq!(config.cache.lines, 4);
    assert_eq!(config.cache.mapping, MappingMode::DirectMapped);
    assert_eq!(config.timing.hit_cycles, 5);
    assert_eq!(config.timing.miss_cycles, 10);
    assert_eq!(config.timing.alu_cycles, 2);
    assert_eq!(config.program.max_instructions, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "timing": { "hit_cycles": 1 } }"#).unwrap();
    assert_eq!(config.timing.hit_cycles, 1);
    assert_eq!(config.timing.miss_cycles, 10);
    assert_eq!(config.timing.alu_cycles, 2);
    assert_eq!(config.cache, CacheConfig::default());
}

#[rstest]
#[case(r#""DirectMapped""#, MappingMode::DirectMapped)]
#[case(r#""direct""#, MappingMode::DirectMapped)]
#[case(r#""Associative""#, MappingMode::Associative)]
#[case(r#""associative""#, MappingMode::Associative)]
fn test_mapping_mode_names(#[case] json: &str, #[case] mode: MappingMode) {
    let config = Config::from_json(&format!(r#"{{ "cache": {{ "mapping": {json} }} }}"#)).unwrap();
    assert_eq!(config.cache.mapping, mode);
}

#[rstest]
#[case(0, MappingMode::DirectMapped)]
#[case(1, MappingMode::Associative)]
#[case(2, MappingMode::DirectMapped)]
#[case(-1, MappingMode::DirectMapped)]
fn test_mapping_mode_from_raw(#[case] raw: i64, #[case] mode: MappingMode) {
    assert_eq!(MappingMode::from_raw(raw), mode);
}

#[test]
fn test_mapping_mode_raw_round_trip() {
    for mode in [MappingMode::DirectMapped, MappingMode::Associative] {
        assert_eq!(MappingMode::from_raw(mode.as_raw()), mode);
    }
}

#[rstest]
#[case(r#"{ "memory": { "size": 0 } }"#, "memory.size")]
#[case(r#"{ "cache": { "lines": 0 } }"#, "cache.lines")]
#[case(r#"{ "program": { "max_instructions": 0 } }"#, "program.max_instructions")]
fn test_zero_sizes_rejected(#[case] json: &str, #[case] field: &str) {
    match Config::from_json(json) {
        Err(ConfigError::Zero { field: got }) => assert_eq!(got, field),
        other => panic!("expected Zero error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        Config::from_json(r#"{ "cache": { "lines": "four" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "cache": {{ "mapping": "Associative" }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cache.mapping, MappingMode::Associative);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_serialize_round_trip() {
    let mut config = Config::default();
    config.cache.mapping = MappingMode::Associative;
    config.timing.miss_cycles = 25;
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}

#[test]
fn test_memory_cycles() {
    let timing = TimingConfig::default();
    assert_eq!(timing.memory_cycles(true), 5);
    assert_eq!(timing.memory_cycles(false), 10);
}
