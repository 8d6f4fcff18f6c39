//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles arithmetic, logical operations, shifts, and the set-if
//! comparison family over 32-bit operands.

use crate::core::control::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements all DLX integer arithmetic and logical operations. The
/// ALU is a pure function of its operands: it holds no state and its
/// output depends only on the arguments.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result. Signed operations wrap on overflow; shift
    /// amounts are masked to 5 bits; comparisons yield 1 or 0.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        /// Bit mask for the shift amount (5 bits: 0-31).
        const SHAMT_MASK: u32 = 0x1F;

        match op {
            AluOp::Nop => 0,
            AluOp::Sll => a.wrapping_shl(b & SHAMT_MASK),
            AluOp::Srl => a.wrapping_shr(b & SHAMT_MASK),
            AluOp::Sra => ((a as i32) >> (b & SHAMT_MASK)) as u32,
            AluOp::Add => (a as i32).wrapping_add(b as i32) as u32,
            AluOp::Addu => a.wrapping_add(b),
            AluOp::Sub => (a as i32).wrapping_sub(b as i32) as u32,
            AluOp::Subu => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Seq => (a == b) as u32,
            AluOp::Sne => (a != b) as u32,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sgt => ((a as i32) > (b as i32)) as u32,
            AluOp::Sle => ((a as i32) <= (b as i32)) as u32,
            AluOp::Sge => ((a as i32) >= (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            AluOp::Sgtu => (a > b) as u32,
            AluOp::Sleu => (a <= b) as u32,
            AluOp::Sgeu => (a >= b) as u32,
        }
    }
}
