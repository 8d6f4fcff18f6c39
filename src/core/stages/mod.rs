//! Pipeline stage functions.
//!
//! Each stage takes the CPU state plus the latch its upstream stage
//! produced during the previous cycle and returns the latch the next
//! stage will consume. An absent input latch (pipeline still warming up)
//! yields an absent output and leaves all state untouched.

/// Instruction decode stage (ID).
pub mod decode;

/// Instruction execute stage (EX).
pub mod execute;

/// Instruction fetch stage (IF).
pub mod fetch;

/// Memory access stage (MEM).
pub mod memory_access;

/// Register writeback stage (WB).
pub mod write_back;
