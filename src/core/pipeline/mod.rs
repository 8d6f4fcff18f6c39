//! Instruction pipeline plumbing.
//!
//! This module contains the inter-stage pipeline latches that carry an
//! instruction's architectural values and control signals from one stage
//! to the next, one cycle at a time.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

pub use latches::{DecodeLatch, ExecuteLatch, FetchLatch, MemoryLatch, Redirect};
