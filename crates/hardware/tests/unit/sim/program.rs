//! # Program Container Tests

use cachesim_core::common::DecodeError;
use cachesim_core::isa::Instruction;
use cachesim_core::sim::{DEFAULT_PROGRAM, Program};

#[test]
fn load_decodes_each_line_once() {
    let mut program = Program::new(100);
    assert_eq!(program.load(["LOAD R1, 5", "HALT", ""]), 3);

    assert!(matches!(
        program.line(0).unwrap().decoded(),
        Ok(Instruction::Load { addr: 5, .. })
    ));
    assert!(matches!(
        program.line(1).unwrap().decoded(),
        Err(DecodeError::Unrecognized { .. })
    ));
    assert!(matches!(
        program.line(2).unwrap().decoded(),
        Err(DecodeError::Invalid { .. })
    ));
    assert_eq!(program.raw(1), "HALT");
}

#[test]
fn fetch_advances_until_exhausted() {
    let mut program = Program::new(100);
    let _ = program.load(DEFAULT_PROGRAM);
    assert_eq!(program.len(), 7);

    let mut fetched = Vec::new();
    while let Some(line) = program.fetch() {
        fetched.push(line.raw().to_string());
    }
    assert_eq!(fetched, DEFAULT_PROGRAM);
    assert!(program.is_exhausted());
    assert_eq!(program.cursor(), 7);
    assert!(program.fetch().is_none());
    assert_eq!(program.cursor(), 7);

    program.rewind();
    assert_eq!(program.cursor(), 0);
    assert_eq!(program.fetch().map(|l| l.raw().to_string()), Some("LOAD R1, 5".into()));
}

#[test]
fn truncates_and_clears() {
    let mut program = Program::new(2);
    assert_eq!(program.load(["A", "B", "C"]), 2);
    assert_eq!(program.capacity(), 2);
    assert_eq!(program.lines().len(), 2);

    program.clear();
    assert!(program.is_empty());
    assert!(program.is_exhausted());
    assert_eq!(program.raw(0), "");
}
