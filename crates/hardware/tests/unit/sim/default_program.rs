//! # Sample Program End-to-End
//!
//! Runs the seven-line sample program in both mapping modes and checks the final
//! machine state, the per-step costs, and the history log.

use cachesim_core::common::Register;
use cachesim_core::config::MappingMode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

#[rstest]
#[case(MappingMode::DirectMapped)]
#[case(MappingMode::Associative)]
fn final_state(#[case] mode: MappingMode) {
    let mut ctx = TestContext::new().with_mode(mode).with_default_program();
    let results = ctx.step_n(7);

    assert_eq!(
        results.iter().map(|r| r.cost).collect::<Vec<_>>(),
        vec![10, 10, 2, 10, 10, 2, 10]
    );
    assert_eq!(ctx.sim.total_cycles(), 54);
    assert_eq!(ctx.reg(Register::R1), -50);
    assert_eq!(ctx.reg(Register::R2), 90);
    assert_eq!(ctx.reg(Register::R3), 140);
    assert_eq!(ctx.reg(Register::R4), 40);
    assert_eq!(ctx.mem(2), 140);
    assert_eq!(ctx.mem(3), -50);
    assert_eq!(ctx.sim.cache_hit_miss_counts(), (0, 5));
    assert_eq!(ctx.sim.cursor(), 7);
}

#[test]
fn history_and_texts() {
    let mut ctx = TestContext::new().with_default_program();
    let _ = ctx.step_n(7);

    assert_eq!(
        ctx.sim.history(),
        [
            "LOAD: Memory[5] -> R1",
            "LOAD: Memory[9] -> R2",
            "ADD: R1 + R2 -> R3",
            "STORE: Memory[2] (value=140) <- R3",
            "LOAD: Memory[4] -> R4",
            "SUB: R4 - R2 -> R1",
            "STORE: Memory[3] (value=-50) <- R1",
        ]
    );
    assert_eq!(ctx.sim.last_operation_text(), "STORE: Memory[3] (value=-50) <- R1");
    assert_eq!(
        ctx.sim.last_explanation_text(),
        "STORE with MISS. Value -50 written to cache and memory."
    );
    assert_eq!(ctx.sim.last_instruction_cost(), 10);
    assert!(ctx.sim.history_log().starts_with("LOAD: Memory[5] -> R1\nLOAD: Memory[9] -> R2\n"));
    assert!(ctx.sim.history_log().ends_with("<- R1\n"));
}

#[test]
fn direct_mapped_lines_after_run() {
    let mut ctx = TestContext::new().with_default_program();
    let _ = ctx.step_n(7);

    assert_eq!(ctx.sim.cache_line_summary(0), "V=1 T=4 D=40");
    assert_eq!(ctx.sim.cache_line_summary(1), "V=1 T=9 D=90");
    assert_eq!(ctx.sim.cache_line_summary(2), "V=1 T=2 D=140");
    assert_eq!(ctx.sim.cache_line_summary(3), "V=1 T=3 D=-50");
    assert_eq!(
        ctx.sim.memory_summary(),
        "[0]: 0,[1]: 10,[2]: 140,[3]: -50,[4]: 40,[5]: 50,[6]: 60,[7]: 70,[8]: 80,[9]: 90"
    );
    assert_eq!(ctx.sim.registers_summary(), "R1=-50, R2=90, R3=140, R4=40");
}

#[test]
fn rerun_after_reset_hits_nothing_but_repeats_totals() {
    let mut ctx = TestContext::new().with_default_program();
    let _ = ctx.step_n(7);
    ctx.sim.reset();

    assert_eq!(ctx.sim.program_len(), 7);
    let _ = ctx.step_n(7);
    assert_eq!(ctx.sim.total_cycles(), 54);
    assert_eq!(ctx.mem(2), 140);
}
