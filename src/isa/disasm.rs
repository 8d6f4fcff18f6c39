//! Instruction Disassembler for the DLX ISA.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for the per-stage trace lines and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use dlx_emulator::isa::disasm::disassemble;
//! let text = disassemble(0x2001_0001); // ADDI R1, R0, 1
//! assert_eq!(text, "ADDI R1, R0, 0x00000001");
//! ```

use crate::isa::{self, funct, opcodes, Format};

/// Returns the mnemonic for an opcode, or `""` when it has none.
fn opcode_mnemonic(op: u8) -> &'static str {
    match op {
        opcodes::J => "J",
        opcodes::JAL => "JAL",
        opcodes::BEQZ => "BEQZ",
        opcodes::BNEZ => "BNEZ",
        opcodes::ADDI => "ADDI",
        opcodes::ADDUI => "ADDUI",
        opcodes::SUBI => "SUBI",
        opcodes::SUBUI => "SUBUI",
        opcodes::ANDI => "ANDI",
        opcodes::ORI => "ORI",
        opcodes::XORI => "XORI",
        opcodes::JR => "JR",
        opcodes::JALR => "JALR",
        opcodes::SLLI => "SLLI",
        opcodes::NOP => "NOP",
        opcodes::SRLI => "SRLI",
        opcodes::SRAI => "SRAI",
        opcodes::SEQI => "SEQI",
        opcodes::SNEI => "SNEI",
        opcodes::SLTI => "SLTI",
        opcodes::SGTI => "SGTI",
        opcodes::SLEI => "SLEI",
        opcodes::SGEI => "SGEI",
        opcodes::LW => "LW",
        opcodes::SW => "SW",
        opcodes::SLTUI => "SLTUI",
        opcodes::SGTUI => "SGTUI",
        opcodes::SLEUI => "SLEUI",
        opcodes::SGEUI => "SGEUI",
        _ => "",
    }
}

/// Returns the mnemonic for an R-type function code, or `""` when unknown.
fn func_mnemonic(f: u16) -> &'static str {
    match f {
        funct::NOP => "NOP",
        funct::SLL => "SLL",
        funct::SRL => "SRL",
        funct::SRA => "SRA",
        funct::ADD => "ADD",
        funct::ADDU => "ADDU",
        funct::SUB => "SUB",
        funct::SUBU => "SUBU",
        funct::AND => "AND",
        funct::OR => "OR",
        funct::XOR => "XOR",
        funct::SEQ => "SEQ",
        funct::SNE => "SNE",
        funct::SLT => "SLT",
        funct::SGT => "SGT",
        funct::SLE => "SLE",
        funct::SGE => "SGE",
        funct::SLTU => "SLTU",
        funct::SGTU => "SGTU",
        funct::SLEU => "SLEU",
        funct::SGEU => "SGEU",
        _ => "",
    }
}

/// Disassembles a 32-bit DLX instruction into a human-readable string.
///
/// Rendering depends on the instruction layout:
///
/// * R-type: `"OP Rd, Rs1, Rs2"`
/// * Branch: `"OP Rs1, 0xIMM"`
/// * Other I-type: `"OP Rd, Rs1, 0xIMM"`
/// * J-type: `"OP 0xIMM"`
///
/// Immediates print sign-extended. Any word with the NOP opcode renders
/// as `"NOP"` regardless of its remaining bits; unrecognized opcodes and
/// unrecognized R-type function codes yield an empty string.
pub fn disassemble(inst: u32) -> String {
    let op = isa::opcode(inst);
    match isa::format_of(op) {
        Format::Nop => "NOP".to_string(),
        Format::Register => {
            let mnemonic = func_mnemonic(isa::func(inst));
            if mnemonic.is_empty() {
                return String::new();
            }
            format!(
                "{} R{}, R{}, R{}",
                mnemonic,
                isa::rd_rtype(inst),
                isa::rs1(inst),
                isa::rs2(inst)
            )
        }
        Format::Jump => format!("{} {:#010x}", opcode_mnemonic(op), isa::imm26(inst)),
        Format::Branch => format!(
            "{} R{}, {:#010x}",
            opcode_mnemonic(op),
            isa::rs1(inst),
            isa::imm16(inst)
        ),
        Format::Immediate => format!(
            "{} R{}, R{}, {:#010x}",
            opcode_mnemonic(op),
            isa::rd_itype(inst),
            isa::rs1(inst),
            isa::imm16(inst)
        ),
        Format::Unknown => String::new(),
    }
}
