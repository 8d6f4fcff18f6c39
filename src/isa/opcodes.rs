//! DLX opcode constants (instruction bits 31..26).

/// R-type register-register arithmetic; the operation is in the function field.
pub const RTYPE: u8 = 0x00;

/// Unconditional jump (J).
pub const J: u8 = 0x02;

/// Jump and link (JAL); the return address is written to R31.
pub const JAL: u8 = 0x03;

/// Branch if equal to zero (BEQZ).
pub const BEQZ: u8 = 0x04;

/// Branch if not equal to zero (BNEZ).
pub const BNEZ: u8 = 0x05;

/// Add immediate, signed (ADDI).
pub const ADDI: u8 = 0x08;

/// Add immediate, unsigned (ADDUI).
pub const ADDUI: u8 = 0x09;

/// Subtract immediate, signed (SUBI).
pub const SUBI: u8 = 0x0A;

/// Subtract immediate, unsigned (SUBUI).
pub const SUBUI: u8 = 0x0B;

/// Bitwise AND immediate (ANDI).
pub const ANDI: u8 = 0x0C;

/// Bitwise OR immediate (ORI).
pub const ORI: u8 = 0x0D;

/// Bitwise XOR immediate (XORI).
pub const XORI: u8 = 0x0E;

/// Jump to register (JR); the target address is taken from rs1.
pub const JR: u8 = 0x12;

/// Jump and link register (JALR).
pub const JALR: u8 = 0x13;

/// Shift left logical immediate (SLLI).
pub const SLLI: u8 = 0x14;

/// No operation. Any word carrying this opcode is a NOP.
pub const NOP: u8 = 0x15;

/// Shift right logical immediate (SRLI).
pub const SRLI: u8 = 0x16;

/// Shift right arithmetic immediate (SRAI).
pub const SRAI: u8 = 0x17;

/// Set if equal immediate (SEQI).
pub const SEQI: u8 = 0x18;

/// Set if not equal immediate (SNEI).
pub const SNEI: u8 = 0x19;

/// Set if less than immediate, signed (SLTI).
pub const SLTI: u8 = 0x1A;

/// Set if greater than immediate, signed (SGTI).
pub const SGTI: u8 = 0x1B;

/// Set if less or equal immediate, signed (SLEI).
pub const SLEI: u8 = 0x1C;

/// Set if greater or equal immediate, signed (SGEI).
pub const SGEI: u8 = 0x1D;

/// Load word (LW).
pub const LW: u8 = 0x23;

/// Store word (SW).
pub const SW: u8 = 0x2B;

/// Set if less than immediate, unsigned (SLTUI).
pub const SLTUI: u8 = 0x3A;

/// Set if greater than immediate, unsigned (SGTUI).
pub const SGTUI: u8 = 0x3B;

/// Set if less or equal immediate, unsigned (SLEUI).
pub const SLEUI: u8 = 0x3C;

/// Set if greater or equal immediate, unsigned (SGEUI).
pub const SGEUI: u8 = 0x3D;
