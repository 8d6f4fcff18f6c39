//! Integration tests for the full pipeline.
//!
//! Programs are NOP-spaced around data dependences: the pipeline has no
//! forwarding, so an instruction may read a register only once its
//! producer has reached Writeback. Writeback runs before Decode within
//! a cycle, so two NOPs between producer and consumer are enough at
//! depth 3.

use dlx_emulator::config::{Config, GeneralConfig, PipelineConfig};
use dlx_emulator::core::{Cpu, Fault};
use dlx_emulator::isa::{self, funct, opcodes};

/// Creates a quiet configuration (no stage tracing) for testing.
fn quiet_config(depth: u8, relative_jump: bool) -> Config {
    Config {
        general: GeneralConfig {
            trace_stages: false,
        },
        pipeline: PipelineConfig {
            delay_slot_depth: depth,
            relative_jump,
        },
    }
}

/// Builds a CPU, loads a program at word 0, and resets it.
fn loaded_cpu(program: &[u32]) -> Cpu {
    let config = quiet_config(3, true);
    let mut cpu = Cpu::new(&config).unwrap();
    for (index, word) in program.iter().enumerate() {
        cpu.load_instruction(index, *word).unwrap();
    }
    cpu.reset();
    cpu
}

/// Steps `n` cycles, asserting the hardwired-zero invariant throughout.
fn run(cpu: &mut Cpu, n: usize) {
    for _ in 0..n {
        cpu.step().unwrap();
        assert_eq!(cpu.reg(0).unwrap(), 0);
    }
}

/// Tests CPU creation: NOP-filled IRAM, zeroed registers and memory.
#[test]
fn test_cpu_creation() {
    let cpu = Cpu::new(&quiet_config(3, true)).unwrap();
    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.warmup, 0);
    for i in 0..32 {
        assert_eq!(cpu.reg(i).unwrap(), 0);
    }
    for addr in [0, 1, 511, 1023] {
        assert_eq!(cpu.mem(addr).unwrap(), 0);
    }
}

/// Tests that an out-of-range delay-slot depth is rejected.
#[test]
fn test_invalid_delay_slot_depth() {
    for depth in [0, 4, 7] {
        let err = Cpu::new(&quiet_config(depth, true)).err();
        assert_eq!(err, Some(Fault::InvalidDelaySlotDepth(depth)));
    }
}

/// Tests the façade bounds checks.
#[test]
fn test_facade_bounds() {
    let mut cpu = Cpu::new(&quiet_config(3, true)).unwrap();
    assert_eq!(cpu.reg(32), Err(Fault::RegisterOutOfRange(32)));
    assert_eq!(cpu.mem(1024), Err(Fault::DramAddressOutOfRange(1024)));
    assert_eq!(
        cpu.load_instruction(1024, 0),
        Err(Fault::IramIndexOutOfRange(1024))
    );
}

/// Tests that loading an all-zero word stores a NOP: stepping over it
/// retires nothing and changes no state.
#[test]
fn test_load_zero_word_is_nop() {
    let mut cpu = loaded_cpu(&[0, 0, 0]);
    run(&mut cpu, 8);
    assert_eq!(cpu.stats.instructions_retired, 0);
    for i in 0..32 {
        assert_eq!(cpu.reg(i).unwrap(), 0);
    }
}

/// Tests that an unrecognized opcode faults when it reaches Decode.
#[test]
fn test_illegal_opcode_faults() {
    let word = 0xFC00_0000; // opcode 0x3F
    let mut cpu = loaded_cpu(&[word]);
    cpu.step().unwrap(); // fetch only
    assert_eq!(
        cpu.step(),
        Err(Fault::IllegalOpcode { opcode: 0x3F, word })
    );
}

/// Tests that a store outside data memory faults in the Memory stage
/// without touching DRAM.
#[test]
fn test_store_out_of_range_faults() {
    let program = [
        isa::encode_itype(opcodes::ADDUI, 1, 0, 2000),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SW, 1, 1, 0), // DRAM[R1 + 0] <- R1
    ];
    let mut cpu = loaded_cpu(&program);
    let fault = loop {
        if let Err(e) = cpu.step() {
            break e;
        }
    };
    assert_eq!(fault, Fault::DramAddressOutOfRange(2000));
    assert_eq!(cpu.last_mem_access(), (0, 0));
}

/// Tests that the PC faults once it runs off instruction memory.
#[test]
fn test_fetch_out_of_range_faults() {
    let mut cpu = loaded_cpu(&[]);
    for _ in 0..1024 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.pc(), 1023);
    assert_eq!(cpu.step(), Err(Fault::FetchOutOfRange(1024)));
}

/// Tests that writes to R0 are discarded.
#[test]
fn test_r0_writes_discarded() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 0, 0, 7),
        isa::encode_rtype(funct::ADD, 0, 0, 0),
        isa::encode_itype(opcodes::SLLI, 0, 0, 2),
    ];
    let mut cpu = loaded_cpu(&program);
    run(&mut cpu, 10);
    assert_eq!(cpu.reg(0).unwrap(), 0);
    assert_eq!(cpu.stats.instructions_retired, 3);
}

/// Tests that reset restores the power-on state while preserving the
/// loaded program: a reset CPU replays identically to a fresh one.
#[test]
fn test_reset_equivalence() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 1, 0, 5),
        isa::encode_itype(opcodes::ADDUI, 2, 0, 9),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SW, 1, 0, 3), // DRAM[3] <- R1
    ];

    let mut fresh = loaded_cpu(&program);

    let mut reused = loaded_cpu(&program);
    run(&mut reused, 12);
    assert_eq!(reused.reg(1).unwrap(), 5);
    assert_eq!(reused.mem(3).unwrap(), 5);
    reused.reset();

    // Power-on state, except the preserved IRAM contents.
    assert_eq!(reused.pc(), u32::MAX); // word index -1, pre-entry
    assert_eq!(reused.warmup, 0);
    assert_eq!(reused.last_mem_access(), (0, 0));
    for i in 0..32 {
        assert_eq!(reused.reg(i).unwrap(), 0);
    }
    assert_eq!(reused.mem(3).unwrap(), 0);

    // Replaying from reset matches a fresh CPU cycle for cycle.
    run(&mut fresh, 13);
    run(&mut reused, 13);
    for i in 0..32 {
        assert_eq!(fresh.reg(i).unwrap(), reused.reg(i).unwrap());
    }
    assert_eq!(fresh.pc(), reused.pc());
    assert_eq!(fresh.warmup, reused.warmup);
    assert_eq!(fresh.mem(3).unwrap(), reused.mem(3).unwrap());
    assert_eq!(fresh.last_mem_access(), reused.last_mem_access());
}

/// Tests R-type addition through the register file.
#[test]
fn test_scenario_rtype_add() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 1, 0, 1),
        isa::encode_itype(opcodes::ADDI, 2, 0, 2),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_rtype(funct::ADD, 3, 1, 2),
    ];
    let mut cpu = loaded_cpu(&program);
    run(&mut cpu, 12);
    assert_eq!(cpu.reg(0).unwrap(), 0);
    assert_eq!(cpu.reg(1).unwrap(), 1);
    assert_eq!(cpu.reg(2).unwrap(), 2);
    assert_eq!(cpu.reg(3).unwrap(), 3);
}

/// Tests that a negative immediate sign-extends through signed addition
/// and lands bit-exact in the unsigned register.
#[test]
fn test_scenario_signed_wrap() {
    let program = [isa::encode_itype(opcodes::ADDI, 1, 0, -1)];
    let mut cpu = loaded_cpu(&program);
    run(&mut cpu, 6);
    assert_eq!(cpu.reg(1).unwrap(), 0xFFFF_FFFF);
}

/// Tests a store/load round trip through data memory, with the
/// last-access record visible after the store.
#[test]
fn test_scenario_load_store_round_trip() {
    let program = [
        isa::encode_itype(opcodes::ADDUI, 1, 0, 0x6F57),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SLLI, 1, 1, 17), // R1 = 0xDEAE0000
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SUBUI, 1, 1, 0x4111), // R1 = 0xDEADBEEF
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SW, 1, 0, 4), // DRAM[4] <- R1
        isa::encode_itype(opcodes::LW, 2, 0, 4), // R2 <- DRAM[4]
    ];
    let mut cpu = loaded_cpu(&program);

    // Through the store's Memory cycle.
    run(&mut cpu, 13);
    assert_eq!(cpu.mem(4).unwrap(), 0xDEAD_BEEF);
    assert_eq!(cpu.last_mem_access(), (4, 0xDEAD_BEEF));

    // Load commits; loads record zero data.
    run(&mut cpu, 3);
    assert_eq!(cpu.reg(2).unwrap(), 0xDEAD_BEEF);
    assert_eq!(cpu.last_mem_access(), (4, 0));
}

/// Tests a not-taken conditional branch: the fall-through path executes
/// and the PC proceeds linearly.
#[test]
fn test_scenario_branch_not_taken() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 1, 0, 1),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::BEQZ, 0, 1, 8),
        isa::encode_itype(opcodes::ADDI, 4, 0, 3),
    ];
    let mut cpu = loaded_cpu(&program);
    run(&mut cpu, 12);
    assert_eq!(cpu.reg(1).unwrap(), 1);
    assert_eq!(cpu.reg(4).unwrap(), 3);
    assert_eq!(cpu.pc(), 11); // linear: pc == steps - 1
    assert_eq!(cpu.stats.branches_taken, 0);
}

/// Tests a taken conditional branch: the redirect lands at nextPC + 8
/// after the three delay slots drain.
#[test]
fn test_scenario_branch_taken() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 1, 0, 0),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::BEQZ, 0, 1, 8), // nextPC 16, target word 6
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::ADDI, 3, 0, 5), // target
    ];
    let mut cpu = loaded_cpu(&program);

    let mut trace = Vec::new();
    for _ in 0..9 {
        cpu.step().unwrap();
        trace.push(cpu.pc());
    }
    assert_eq!(trace, vec![0, 1, 2, 3, 4, 5, 6, 6, 7]);

    run(&mut cpu, 3);
    assert_eq!(cpu.reg(3).unwrap(), 5);
    assert!(cpu.stats.branches_taken >= 1);
}

/// Tests JAL and JR: the link register catches the return address and
/// JR transfers control back to it.
#[test]
fn test_scenario_jal_and_jr() {
    let program = [
        isa::encode_jtype(opcodes::JAL, 16), // target word 5; R31 = 4
        isa::encode_itype(opcodes::ADDUI, 2, 2, 1), // runs as delay slot and again after return
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::ADDI, 6, 0, 666), // in the jumped-over gap
        isa::encode_itype(opcodes::JR, 0, 31, 0), // sub: return through R31
        isa::encode_itype(opcodes::ADDI, 3, 0, 9), // sub delay slot
    ];
    let mut cpu = loaded_cpu(&program);

    run(&mut cpu, 5);
    assert_eq!(cpu.pc(), 5); // redirected into the subroutine
    assert_eq!(cpu.reg(31).unwrap(), 4); // byte return address
    assert_eq!(cpu.reg(6).unwrap(), 0); // the gap word was jumped over

    run(&mut cpu, 4);
    assert_eq!(cpu.pc(), 1); // JR sent control back to nextPC / 4

    run(&mut cpu, 4);
    assert_eq!(cpu.reg(2).unwrap(), 2); // word 1 committed twice
    assert_eq!(cpu.reg(3).unwrap(), 9);
}

/// Tests that the instruction mix classifies retired instructions.
#[test]
fn test_stats_instruction_mix() {
    let program = [
        isa::encode_itype(opcodes::ADDI, 1, 0, 3),
        isa::NOP_INSTRUCTION,
        isa::NOP_INSTRUCTION,
        isa::encode_itype(opcodes::SW, 1, 0, 2),
        isa::encode_itype(opcodes::LW, 2, 0, 2),
        isa::encode_itype(opcodes::BNEZ, 0, 1, 8),
    ];
    let mut cpu = loaded_cpu(&program);
    run(&mut cpu, 10);
    assert_eq!(cpu.stats.inst_alu, 1);
    assert_eq!(cpu.stats.inst_store, 1);
    assert_eq!(cpu.stats.inst_load, 1);
    assert_eq!(cpu.stats.inst_branch, 1);
    assert_eq!(cpu.stats.instructions_retired, 4);
    assert_eq!(cpu.stats.cycles, 10);
}
