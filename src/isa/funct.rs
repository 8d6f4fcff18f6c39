//! R-type function codes (instruction bits 10..0).

/// No computation.
pub const NOP: u16 = 0x00;

/// Shift left logical.
pub const SLL: u16 = 0x04;

/// Shift right logical.
pub const SRL: u16 = 0x06;

/// Shift right arithmetic.
pub const SRA: u16 = 0x07;

/// Add, signed.
pub const ADD: u16 = 0x20;

/// Add, unsigned.
pub const ADDU: u16 = 0x21;

/// Subtract, signed.
pub const SUB: u16 = 0x22;

/// Subtract, unsigned.
pub const SUBU: u16 = 0x23;

/// Bitwise AND.
pub const AND: u16 = 0x24;

/// Bitwise OR.
pub const OR: u16 = 0x25;

/// Bitwise XOR.
pub const XOR: u16 = 0x26;

/// Set if equal.
pub const SEQ: u16 = 0x28;

/// Set if not equal.
pub const SNE: u16 = 0x29;

/// Set if less than, signed.
pub const SLT: u16 = 0x2A;

/// Set if greater than, signed.
pub const SGT: u16 = 0x2B;

/// Set if less or equal, signed.
pub const SLE: u16 = 0x2C;

/// Set if greater or equal, signed.
pub const SGE: u16 = 0x2D;

/// Set if less than, unsigned.
pub const SLTU: u16 = 0x3A;

/// Set if greater than, unsigned.
pub const SGTU: u16 = 0x3B;

/// Set if less or equal, unsigned.
pub const SLEU: u16 = 0x3C;

/// Set if greater or equal, unsigned.
pub const SGEU: u16 = 0x3D;
