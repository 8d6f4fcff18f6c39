use crate::core::control::BranchKind;
use crate::core::cpu::Cpu;
use crate::core::pipeline::{DecodeLatch, ExecuteLatch};
use crate::core::units::alu::Alu;

/// Instruction execute.
///
/// Selects the ALU operands, runs the ALU, and resolves whether the
/// instruction requests a PC redirect. For control-flow instructions
/// operand A is the next sequential byte address (relative jumps) or
/// zero (absolute jumps), so the ALU output is the branch target.
pub fn execute_stage(cpu: &mut Cpu, input: Option<DecodeLatch>) -> Option<ExecuteLatch> {
    let decode = input?;

    let operand_a = if decode.ctrl.branch != BranchKind::None {
        if cpu.relative_jump {
            decode.next_pc
        } else {
            0
        }
    } else {
        decode.rs1_val
    };
    let operand_b = if decode.ctrl.use_imm {
        decode.imm
    } else {
        decode.rs2_val
    };

    let alu_out = Alu::execute(decode.ctrl.alu, operand_a, operand_b);

    let taken = match decode.ctrl.branch {
        BranchKind::None => false,
        BranchKind::Jump | BranchKind::JumpLink => true,
        BranchKind::Eqz => decode.rs1_val == 0,
        BranchKind::Neqz => decode.rs1_val != 0,
    };

    cpu.trace_stage("EXE", &decode.disasm);
    Some(ExecuteLatch {
        alu_out,
        taken,
        rs1_val: decode.rs1_val,
        rs2_val: decode.rs2_val,
        rd: decode.rd,
        next_pc: decode.next_pc,
        ctrl: decode.ctrl,
        disasm: decode.disasm,
    })
}
