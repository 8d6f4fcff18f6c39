//! Control-signal derivation.
//!
//! The control decoder is a pure function from a 32-bit instruction word
//! to the control word that steers the instruction through the remaining
//! pipeline stages. It is invoked exactly once per instruction, in the
//! Decode stage, and the result is propagated latch-to-latch from there.

use crate::core::fault::Fault;
use crate::isa::{self, funct, opcodes};

/// ALU operation selector.
///
/// One variant per R-type function code, plus `Nop` for instructions
/// that perform no computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// No computation; the ALU outputs zero.
    #[default]
    Nop,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Add, signed.
    Add,
    /// Add, unsigned.
    Addu,
    /// Subtract, signed.
    Sub,
    /// Subtract, unsigned.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Set if equal.
    Seq,
    /// Set if not equal.
    Sne,
    /// Set if less than, signed.
    Slt,
    /// Set if greater than, signed.
    Sgt,
    /// Set if less or equal, signed.
    Sle,
    /// Set if greater or equal, signed.
    Sge,
    /// Set if less than, unsigned.
    Sltu,
    /// Set if greater than, unsigned.
    Sgtu,
    /// Set if less or equal, unsigned.
    Sleu,
    /// Set if greater or equal, unsigned.
    Sgeu,
}

impl AluOp {
    /// Maps an R-type function code to its ALU operation.
    ///
    /// Returns `None` for function codes with no assigned operation.
    pub fn from_func(f: u16) -> Option<Self> {
        match f {
            funct::NOP => Some(Self::Nop),
            funct::SLL => Some(Self::Sll),
            funct::SRL => Some(Self::Srl),
            funct::SRA => Some(Self::Sra),
            funct::ADD => Some(Self::Add),
            funct::ADDU => Some(Self::Addu),
            funct::SUB => Some(Self::Sub),
            funct::SUBU => Some(Self::Subu),
            funct::AND => Some(Self::And),
            funct::OR => Some(Self::Or),
            funct::XOR => Some(Self::Xor),
            funct::SEQ => Some(Self::Seq),
            funct::SNE => Some(Self::Sne),
            funct::SLT => Some(Self::Slt),
            funct::SGT => Some(Self::Sgt),
            funct::SLE => Some(Self::Sle),
            funct::SGE => Some(Self::Sge),
            funct::SLTU => Some(Self::Sltu),
            funct::SGTU => Some(Self::Sgtu),
            funct::SLEU => Some(Self::Sleu),
            funct::SGEU => Some(Self::Sgeu),
            _ => None,
        }
    }
}

/// Control-flow class of an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchKind {
    /// Not a control-flow instruction.
    #[default]
    None,
    /// Unconditional jump (J, JR).
    Jump,
    /// Unconditional jump that writes the return address to R31 (JAL, JALR).
    JumpLink,
    /// Taken when rs1 equals zero (BEQZ).
    Eqz,
    /// Taken when rs1 differs from zero (BNEZ).
    Neqz,
}

/// Control signals for pipeline stage execution.
///
/// Generated once during decode; downstream stages consult these flags
/// instead of re-examining the instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Control-flow class.
    pub branch: BranchKind,
    /// Enable write to the destination register in Writeback.
    pub reg_write: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// ALU operand B is the immediate rather than rs2.
    pub use_imm: bool,
    /// The redirect target is rs1 rather than the ALU output (JR/JALR).
    pub reg_jump: bool,
}

impl ControlSignals {
    /// True when no signal is asserted, i.e. the word decodes to a NOP.
    pub fn is_nop(&self) -> bool {
        *self == Self::default()
    }
}

/// Derives the control word for an instruction.
///
/// Pure and total over the recognized opcode set; an opcode or R-type
/// function code with no assigned meaning is a fatal fault.
pub fn decode(word: u32) -> Result<ControlSignals, Fault> {
    let opcode = isa::opcode(word);
    let mut ctrl = ControlSignals::default();

    match opcode {
        opcodes::NOP => {}
        opcodes::RTYPE => {
            let func = isa::func(word);
            ctrl.alu = AluOp::from_func(func).ok_or(Fault::IllegalFunction { func, word })?;
            ctrl.reg_write = true;
        }
        opcodes::J | opcodes::JAL | opcodes::JR | opcodes::JALR => {
            ctrl.use_imm = true;
            ctrl.alu = AluOp::Addu;
            ctrl.reg_jump = opcode == opcodes::JR || opcode == opcodes::JALR;
            if opcode == opcodes::JAL || opcode == opcodes::JALR {
                ctrl.branch = BranchKind::JumpLink;
                ctrl.reg_write = true;
            } else {
                ctrl.branch = BranchKind::Jump;
            }
        }
        opcodes::BEQZ | opcodes::BNEZ => {
            ctrl.use_imm = true;
            ctrl.alu = AluOp::Addu;
            ctrl.branch = if opcode == opcodes::BEQZ {
                BranchKind::Eqz
            } else {
                BranchKind::Neqz
            };
        }
        opcodes::LW => {
            ctrl.use_imm = true;
            ctrl.alu = AluOp::Addu;
            ctrl.reg_write = true;
            ctrl.mem_read = true;
        }
        opcodes::SW => {
            ctrl.use_imm = true;
            ctrl.alu = AluOp::Addu;
            ctrl.mem_write = true;
        }
        _ => {
            ctrl.use_imm = true;
            ctrl.reg_write = true;
            ctrl.alu = match opcode {
                opcodes::ADDI => AluOp::Add,
                opcodes::ADDUI => AluOp::Addu,
                opcodes::SUBI => AluOp::Sub,
                opcodes::SUBUI => AluOp::Subu,
                opcodes::ANDI => AluOp::And,
                opcodes::ORI => AluOp::Or,
                opcodes::XORI => AluOp::Xor,
                opcodes::SLLI => AluOp::Sll,
                opcodes::SRLI => AluOp::Srl,
                opcodes::SRAI => AluOp::Sra,
                opcodes::SEQI => AluOp::Seq,
                opcodes::SNEI => AluOp::Sne,
                opcodes::SLTI => AluOp::Slt,
                opcodes::SGTI => AluOp::Sgt,
                opcodes::SLEI => AluOp::Sle,
                opcodes::SGEI => AluOp::Sge,
                opcodes::SLTUI => AluOp::Sltu,
                opcodes::SGTUI => AluOp::Sgtu,
                opcodes::SLEUI => AluOp::Sleu,
                opcodes::SGEUI => AluOp::Sgeu,
                _ => return Err(Fault::IllegalOpcode { opcode, word }),
            };
        }
    }

    Ok(ctrl)
}
