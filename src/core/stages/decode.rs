use crate::core::control::{self, BranchKind};
use crate::core::cpu::Cpu;
use crate::core::fault::Fault;
use crate::core::pipeline::{DecodeLatch, FetchLatch};
use crate::isa::{self, Format};

/// Instruction decode and register fetch.
///
/// Derives the control word (once, for the whole pipeline), extracts the
/// register indices and sign-extended immediate for the instruction's
/// layout, and reads the register file. R0 reads as zero.
pub fn decode_stage(cpu: &mut Cpu, input: Option<FetchLatch>) -> Result<Option<DecodeLatch>, Fault> {
    let Some(fetch) = input else {
        return Ok(None);
    };

    let inst = fetch.inst;
    let ctrl = control::decode(inst)?;

    let mut rd = 0u8;
    let mut rs1_val = 0u32;
    let mut rs2_val = 0u32;
    let mut imm = 0u32;

    match isa::format_of(isa::opcode(inst)) {
        Format::Nop => {}
        Format::Register => {
            rs1_val = cpu.regs.read(isa::rs1(inst) as usize);
            rs2_val = cpu.regs.read(isa::rs2(inst) as usize);
            rd = isa::rd_rtype(inst);
        }
        Format::Jump => {
            imm = isa::imm26(inst);
            if ctrl.reg_jump {
                rs1_val = cpu.regs.read(isa::rs1(inst) as usize);
            }
            if ctrl.branch == BranchKind::JumpLink {
                // The return address lands in the link register.
                rd = 31;
            }
        }
        Format::Branch => {
            imm = isa::imm16(inst);
            rs1_val = cpu.regs.read(isa::rs1(inst) as usize);
        }
        Format::Immediate => {
            imm = isa::imm16(inst);
            rs1_val = cpu.regs.read(isa::rs1(inst) as usize);
            rd = isa::rd_itype(inst);
            if ctrl.mem_write {
                // SW: the rd field names the register holding the store value.
                rs2_val = cpu.regs.read(rd as usize);
            }
        }
        // Unknown opcodes were rejected by the control decoder above.
        Format::Unknown => {}
    }

    cpu.trace_stage("DECODE", &fetch.disasm);
    Ok(Some(DecodeLatch {
        rs1_val,
        rs2_val,
        rd,
        imm,
        ctrl,
        next_pc: fetch.next_pc,
        disasm: fetch.disasm,
    }))
}
