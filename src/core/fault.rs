//! Fatal fault definitions.
//!
//! A fault indicates either a malformed program or a caller error. There
//! is no recovery path: the driver propagates the fault out of `step` and
//! the simulation must be reset or discarded. A stage checks its fault
//! conditions before mutating any architectural state, so the offending
//! operation never lands.

use thiserror::Error;

/// Fatal simulator fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Opcode with no assigned meaning reached the decoder.
    #[error("illegal opcode {opcode:#04x} in instruction {word:#010x}")]
    IllegalOpcode {
        /// The 6-bit opcode field.
        opcode: u8,
        /// The full instruction word.
        word: u32,
    },

    /// R-type function code with no assigned ALU operation.
    #[error("illegal function code {func:#05x} in instruction {word:#010x}")]
    IllegalFunction {
        /// The 11-bit function field.
        func: u16,
        /// The full instruction word.
        word: u32,
    },

    /// The program counter left instruction memory.
    #[error("fetch from word index {0} outside instruction memory")]
    FetchOutOfRange(i32),

    /// An instruction load targeted a word index outside instruction memory.
    #[error("instruction store to word index {0} outside instruction memory")]
    IramIndexOutOfRange(usize),

    /// A load or store targeted a word index outside data memory.
    #[error("data access to word index {0} outside data memory")]
    DramAddressOutOfRange(u32),

    /// A register index outside R0..R31.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(usize),

    /// The configured delay-slot depth is not 1, 2, or 3.
    #[error("delay slot depth must be 1, 2, or 3 (got {0})")]
    InvalidDelaySlotDepth(u8),
}
