//! CPU core implementation.
//!
//! Contains the architectural state container ([`Cpu`]), the control
//! decoder, the execution units, the five stage functions, and the
//! inter-stage latches that connect them.

/// Control-signal derivation (the pure instruction decoder).
pub mod control;

/// CPU state, cycle driver, and public operations.
pub mod cpu;

/// Fatal fault definitions.
pub mod fault;

/// Inter-stage pipeline latches.
pub mod pipeline;

/// General-purpose register file.
pub mod register_file;

/// Pipeline stage functions (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Execution units (ALU).
pub mod units;

pub use cpu::{Cpu, MemAccess, RedirectPoint, DRAM_WORDS, IRAM_WORDS};
pub use fault::Fault;
