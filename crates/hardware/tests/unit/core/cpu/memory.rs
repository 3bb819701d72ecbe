//! # CPU Memory Path Tests
//!
//! The LOAD/STORE helpers beneath `execute`.

use cachesim_core::common::{AccessError, Register};
use cachesim_core::config::Config;
use cachesim_core::core::Cpu;

#[test]
fn load_copies_line_data_into_register() {
    let mut cpu = Cpu::new(&Config::default());
    let access = cpu.load(Register::R2, 9).unwrap();
    assert!(!access.hit);
    assert_eq!(access.line, 1);
    assert_eq!(cpu.regs.get(Register::R2), 90);
}

#[test]
fn load_serves_cached_data_over_memory() {
    let mut cpu = Cpu::new(&Config::default());
    let _ = cpu.load(Register::R1, 3).unwrap();
    assert!(cpu.cache.force_line_data(3, -1));

    let access = cpu.load(Register::R1, 3).unwrap();
    assert!(access.hit);
    assert_eq!(cpu.regs.get(Register::R1), -1);
    assert_eq!(cpu.memory.peek(3), 30);
}

#[test]
fn store_reads_source_register() {
    let mut cpu = Cpu::new(&Config::default());
    cpu.regs.set(Register::R4, 77);
    let access = cpu.store(Register::R4, 6).unwrap();
    assert_eq!(access.data, 77);
    assert_eq!(cpu.memory.peek(6), 77);
}

#[test]
fn errors_carry_memory_size() {
    let mut config = Config::default();
    config.memory.size = 16;
    let mut cpu = Cpu::new(&config);
    assert_eq!(
        cpu.load(Register::R1, 16),
        Err(AccessError::AddressOutOfRange { addr: 16, size: 16 })
    );
    assert!(cpu.load(Register::R1, 15).is_ok());
}
