//! DLX General-Purpose Register File.
//!
//! This module implements the general-purpose register file, containing
//! 32 registers (R0-R31). It enforces the architectural invariant that
//! register R0 is always hardwired to zero. R31 is by convention the
//! link register written by JAL/JALR.

/// General-purpose register file.
///
/// Contains 32 registers (R0-R31) used for integer operations. Register
/// R0 is hardwired to zero and cannot be modified.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a general-purpose register value.
    ///
    /// Register R0 (index 0) always returns 0 regardless of storage.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register R0 (index 0) are silently discarded as R0 is
    /// hardwired to zero.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; 32];
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers four per line with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..32).step_by(4) {
            println!(
                "R{:<2}={:#010x} R{:<2}={:#010x} R{:<2}={:#010x} R{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            )
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
