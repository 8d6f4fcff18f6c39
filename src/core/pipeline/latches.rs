//! Pipeline latch structures for inter-stage communication.
//!
//! Pipeline latches store instruction state as it flows through the five
//! pipeline stages. Each latch is a value snapshot produced by one stage
//! and consumed by move by the downstream stage on the following cycle.
//! An absent latch (`None` in the `Cpu` slots) means the pipeline
//! position is still empty after reset.

use crate::core::control::ControlSignals;

/// Values the PC-update policy needs from a latch, independent of which
/// stage resolves the redirect.
#[derive(Clone, Copy, Debug)]
pub struct Redirect {
    /// The redirect target is `rs1` (JR/JALR).
    pub reg_jump: bool,
    /// The instruction requests a PC redirect.
    pub taken: bool,
    /// rs1 value, a byte address for register-indirect jumps.
    pub rs1_val: u32,
    /// ALU output, a byte address for taken branches and jumps.
    pub alu_out: u32,
}

/// IF/ID latch (Fetch to Decode stage).
///
/// Carries the raw instruction word out of instruction memory together
/// with the byte address of the next sequential instruction and the
/// pre-rendered disassembly used by the trace lines. Fetch performs no
/// decoding; the control word is derived in the Decode stage.
#[derive(Clone, Debug, Default)]
pub struct FetchLatch {
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Byte address of the next sequential instruction.
    pub next_pc: u32,
    /// Disassembly of `inst`, empty for unrecognized words.
    pub disasm: String,
}

/// ID/EX latch (Decode to Execute stage).
#[derive(Clone, Debug, Default)]
pub struct DecodeLatch {
    /// Value read from the rs1 register.
    pub rs1_val: u32,
    /// Value read from the rs2 register (the store value for SW).
    pub rs2_val: u32,
    /// Destination register index.
    pub rd: u8,
    /// Sign-extended immediate.
    pub imm: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Byte address of the next sequential instruction.
    pub next_pc: u32,
    /// Disassembly, carried for the trace lines.
    pub disasm: String,
}

/// EX/MEM latch (Execute to Memory stage).
#[derive(Clone, Debug, Default)]
pub struct ExecuteLatch {
    /// ALU computation result, or the branch target byte address.
    pub alu_out: u32,
    /// The instruction requests a PC redirect.
    pub taken: bool,
    /// rs1 value, kept for register-indirect jumps.
    pub rs1_val: u32,
    /// rs2 value, kept for stores.
    pub rs2_val: u32,
    /// Destination register index.
    pub rd: u8,
    /// Byte address of the next sequential instruction.
    pub next_pc: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Disassembly, carried for the trace lines.
    pub disasm: String,
}

impl ExecuteLatch {
    /// Snapshot of the fields the PC-update policy consults.
    pub fn redirect(&self) -> Redirect {
        Redirect {
            reg_jump: self.ctrl.reg_jump,
            taken: self.taken,
            rs1_val: self.rs1_val,
            alu_out: self.alu_out,
        }
    }
}

/// MEM/WB latch (Memory to Writeback stage).
#[derive(Clone, Debug, Default)]
pub struct MemoryLatch {
    /// Data read from data memory (for loads).
    pub dram_out: u32,
    /// ALU computation result, or the branch target byte address.
    pub alu_out: u32,
    /// Destination register index.
    pub rd: u8,
    /// Byte address of the next sequential instruction.
    pub next_pc: u32,
    /// rs1 value, kept for register-indirect jumps.
    pub rs1_val: u32,
    /// The instruction requests a PC redirect.
    pub taken: bool,
    /// Control signals for the Writeback stage.
    pub ctrl: ControlSignals,
    /// Disassembly, carried for the trace lines.
    pub disasm: String,
}

impl MemoryLatch {
    /// Snapshot of the fields the PC-update policy consults.
    pub fn redirect(&self) -> Redirect {
        Redirect {
            reg_jump: self.ctrl.reg_jump,
            taken: self.taken,
            rs1_val: self.rs1_val,
            alu_out: self.alu_out,
        }
    }
}
