//! # CPU Execution Tests
//!
//! Executes decoded instructions directly against a `Cpu` and checks state,
//! cost, outcome, and the operation/explanation texts.

use cachesim_core::common::{AccessError, Register, StepError};
use cachesim_core::config::{Config, MappingMode};
use cachesim_core::core::{Cpu, StepOutcome};
use cachesim_core::isa::Instruction;
use pretty_assertions::assert_eq;

fn create_test_cpu() -> Cpu {
    crate::common::harness::init_tracing();
    Cpu::new(&Config::default())
}

fn load(dst: Register, addr: i64) -> Instruction {
    Instruction::Load { dst, addr }
}

fn store(src: Register, addr: i64) -> Instruction {
    Instruction::Store { src, addr }
}

#[test]
fn load_miss_then_hit() {
    let mut cpu = create_test_cpu();

    let miss = cpu.execute(load(Register::R1, 5));
    assert_eq!(miss.outcome, StepOutcome::MemoryAccess { hit: false });
    assert_eq!(miss.cost, 10);
    assert_eq!(miss.operation, "LOAD: Memory[5] -> R1");
    assert_eq!(miss.explanation, "LOAD from memory (MISS). Value=50");
    assert_eq!(cpu.regs.get(Register::R1), 50);

    let hit = cpu.execute(load(Register::R2, 5));
    assert_eq!(hit.outcome, StepOutcome::MemoryAccess { hit: true });
    assert_eq!(hit.cost, 5);
    assert_eq!(hit.explanation, "LOAD via cache (HIT). Value=50");
    assert_eq!(cpu.regs.get(Register::R2), 50);
}

#[test]
fn store_texts_and_write_through() {
    let mut cpu = create_test_cpu();
    cpu.regs.set(Register::R3, 140);

    let result = cpu.execute(store(Register::R3, 2));
    assert_eq!(result.outcome, StepOutcome::MemoryAccess { hit: false });
    assert_eq!(result.cost, 10);
    assert_eq!(result.operation, "STORE: Memory[2] (value=140) <- R3");
    assert_eq!(
        result.explanation,
        "STORE with MISS. Value 140 written to cache and memory."
    );
    assert_eq!(cpu.memory.peek(2), 140);
    assert!(cpu.cache.contains(2));

    let again = cpu.execute(store(Register::R3, 2));
    assert_eq!(again.outcome.hit(), Some(true));
    assert_eq!(again.cost, 5);
}

#[test]
fn add_and_sub() {
    let mut cpu = create_test_cpu();
    cpu.regs.set(Register::R1, 50);
    cpu.regs.set(Register::R2, 90);

    let add = cpu.execute(Instruction::Add {
        dst: Register::R3,
        src1: Register::R1,
        src2: Register::R2,
    });
    assert_eq!(add.outcome, StepOutcome::Arithmetic);
    assert_eq!(add.cost, 2);
    assert_eq!(add.operation, "ADD: R1 + R2 -> R3");
    assert_eq!(add.explanation, "Sum of 50 + 90 = 140");
    assert_eq!(cpu.regs.get(Register::R3), 140);

    cpu.regs.set(Register::R4, 40);
    let sub = cpu.execute(Instruction::Sub {
        dst: Register::R1,
        src1: Register::R4,
        src2: Register::R2,
    });
    assert_eq!(sub.operation, "SUB: R4 - R2 -> R1");
    assert_eq!(sub.explanation, "Difference of 40 - 90 = -50");
    assert_eq!(cpu.regs.get(Register::R1), -50);
    assert_eq!(cpu.cache.hits() + cpu.cache.misses(), 0);
}

#[test]
fn out_of_range_load_is_rejected_without_effect() {
    let mut cpu = create_test_cpu();
    cpu.regs.set(Register::R1, 7);

    let result = cpu.execute(load(Register::R1, 999));
    assert_eq!(
        result.outcome,
        StepOutcome::Rejected(StepError::AddressOutOfRange(
            AccessError::AddressOutOfRange { addr: 999, size: 10 }
        ))
    );
    assert_eq!(result.cost, 0);
    assert_eq!(result.operation, "LOAD (addr=999 invalid) -> R1");
    assert_eq!(
        result.explanation,
        "address 999 is outside memory (valid range 0..10)"
    );
    assert_eq!(cpu.regs.get(Register::R1), 7);
    assert_eq!(cpu.cache.misses(), 0);
}

#[test]
fn out_of_range_store_is_rejected_without_effect() {
    let mut cpu = create_test_cpu();
    cpu.regs.set(Register::R2, 1);
    let memory = cpu.memory.clone();

    let result = cpu.execute(store(Register::R2, -3));
    assert!(result.outcome.error().is_some());
    assert!(!result.outcome.is_completed());
    assert_eq!(result.operation, "STORE (addr=-3 invalid) <- R2");
    assert_eq!(cpu.memory, memory);
    assert!(cpu.cache.lines().iter().all(|l| !l.valid()));
}

#[test]
fn associative_mode_costs_follow_hits() {
    let mut cpu = create_test_cpu();
    cpu.cache.set_mapping_mode(MappingMode::Associative);

    let costs: Vec<u64> = [0, 4, 0, 4]
        .into_iter()
        .map(|addr| cpu.execute(load(Register::R1, addr)).cost)
        .collect();
    assert_eq!(costs, vec![10, 10, 5, 5]);
}

#[test]
fn custom_timing_is_charged() {
    let mut config = Config::default();
    config.timing.hit_cycles = 1;
    config.timing.miss_cycles = 100;
    config.timing.alu_cycles = 3;
    let mut cpu = Cpu::new(&config);

    assert_eq!(cpu.execute(load(Register::R1, 1)).cost, 100);
    assert_eq!(cpu.execute(load(Register::R1, 1)).cost, 1);
    let add = cpu.execute(Instruction::Add {
        dst: Register::R1,
        src1: Register::R1,
        src2: Register::R1,
    });
    assert_eq!(add.cost, 3);
}

#[test]
fn reset_restores_state_and_keeps_mode() {
    let mut cpu = create_test_cpu();
    cpu.cache.set_mapping_mode(MappingMode::Associative);
    cpu.regs.set(Register::R4, 9);
    let _ = cpu.execute(store(Register::R4, 0));

    cpu.reset();

    assert_eq!(cpu.regs.summary(), "R1=0, R2=0, R3=0, R4=0");
    assert_eq!(cpu.memory.peek(0), 0);
    assert_eq!(cpu.cache.misses(), 0);
    assert_eq!(cpu.cache.mapping_mode(), MappingMode::Associative);
}
