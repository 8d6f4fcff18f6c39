//! CPU state container and cycle driver.
//!
//! The `Cpu` owns the whole architectural state: program counter,
//! register file, instruction and data memory, the four inter-stage
//! latches, and the warm-up counter that tracks how full the pipeline
//! is. `step` advances the machine by exactly one clock cycle, invoking
//! the stages in reverse order (WB, MEM, EX, ID, IF) so each stage
//! consumes the latch its upstream neighbour produced during the
//! previous cycle.

use crate::config::Config;
use crate::core::fault::Fault;
use crate::core::pipeline::{DecodeLatch, ExecuteLatch, FetchLatch, MemoryLatch, Redirect};
use crate::core::register_file::RegisterFile;
use crate::core::stages;
use crate::isa;
use crate::stats::SimStats;

/// Instruction memory size in words.
pub const IRAM_WORDS: usize = 1024;

/// Data memory size in words.
pub const DRAM_WORDS: usize = 1024;

/// Pipeline stage at which a resolved branch updates the program counter.
///
/// The stage choice fixes the number of delay slots: instructions fetched
/// between a branch and its redirect still execute. Depth 1 redirects in
/// Execute, depth 2 in Memory, depth 3 in Writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectPoint {
    /// Redirect in the Execute stage (one delay slot).
    Execute,
    /// Redirect in the Memory stage (two delay slots).
    Memory,
    /// Redirect in the Writeback stage (three delay slots).
    WriteBack,
}

impl RedirectPoint {
    /// Maps a delay-slot depth to the stage that applies the redirect.
    pub fn from_delay_slot_depth(depth: u8) -> Result<Self, Fault> {
        match depth {
            1 => Ok(Self::Execute),
            2 => Ok(Self::Memory),
            3 => Ok(Self::WriteBack),
            _ => Err(Fault::InvalidDelaySlotDepth(depth)),
        }
    }
}

/// Address and data of the most recent data-memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemAccess {
    /// Word index of the access.
    pub addr: u32,
    /// Stored data for stores, zero for loads.
    pub data: u32,
}

/// The DLX processor model.
pub struct Cpu {
    /// Program counter as a signed word index. Parked at −1 by `reset`
    /// so the cycle-0 pre-increment fetches word 0.
    pub(crate) pc: i32,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Cycles run since reset, saturating at 4. Gates the downstream
    /// stages until the pipeline is full.
    pub warmup: u8,
    /// Simulation statistics.
    pub stats: SimStats,

    pub(crate) iram: [u32; IRAM_WORDS],
    pub(crate) dram: [u32; DRAM_WORDS],
    pub(crate) last_mem: MemAccess,
    pub(crate) trace: bool,
    pub(crate) relative_jump: bool,
    redirect_point: RedirectPoint,

    if_id: Option<FetchLatch>,
    id_ex: Option<DecodeLatch>,
    ex_mem: Option<ExecuteLatch>,
    mem_wb: Option<MemoryLatch>,
}

impl Cpu {
    /// Creates a CPU from a configuration.
    ///
    /// Instruction memory is filled with the canonical NOP encoding,
    /// data memory and registers are zeroed. Call [`Cpu::reset`] after
    /// loading a program and before the first `step`; `new` leaves the
    /// PC at word 0 rather than the pre-entry slot.
    ///
    /// The delay-slot depth and jump addressing mode are fixed here for
    /// the lifetime of the CPU.
    pub fn new(config: &Config) -> Result<Self, Fault> {
        let redirect_point =
            RedirectPoint::from_delay_slot_depth(config.pipeline.delay_slot_depth)?;
        Ok(Self {
            pc: 0,
            regs: RegisterFile::new(),
            warmup: 0,
            stats: SimStats::default(),
            iram: [isa::NOP_INSTRUCTION; IRAM_WORDS],
            dram: [0; DRAM_WORDS],
            last_mem: MemAccess::default(),
            trace: config.general.trace_stages,
            relative_jump: config.pipeline.relative_jump,
            redirect_point,
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
        })
    }

    /// Returns the CPU to its power-on state.
    ///
    /// Zeroes the registers and data memory, discards every latch, and
    /// parks the PC one word before the entry point. Instruction memory
    /// and the configuration survive a reset; only `new` clears IRAM.
    pub fn reset(&mut self) {
        self.pc = -1;
        self.regs.clear();
        self.dram = [0; DRAM_WORDS];
        self.last_mem = MemAccess::default();
        self.warmup = 0;
        self.if_id = None;
        self.id_ex = None;
        self.ex_mem = None;
        self.mem_wb = None;
    }

    /// Stores an instruction word at a word index of instruction memory.
    ///
    /// An all-zero word is stored as the canonical NOP encoding.
    pub fn load_instruction(&mut self, index: usize, word: u32) -> Result<(), Fault> {
        if index >= IRAM_WORDS {
            return Err(Fault::IramIndexOutOfRange(index));
        }
        self.iram[index] = if word == 0 {
            isa::NOP_INSTRUCTION
        } else {
            word
        };
        Ok(())
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// Stages run in reverse order so that each consumes the latch
    /// produced during the previous cycle. While the pipeline is warming
    /// up, a stage whose input latch cannot exist yet is skipped, and if
    /// it is the redirect point the PC is incremented in its place to
    /// keep the fetch stream advancing. Exactly one PC action happens
    /// per cycle.
    ///
    /// A fault aborts the cycle; the faulting stage checks its bounds
    /// before mutating any state.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.stats.cycles += 1;

        if self.warmup > 3 {
            let latch = self.mem_wb.take();
            if self.redirect_point == RedirectPoint::WriteBack {
                self.apply_redirect(latch.as_ref().map(MemoryLatch::redirect));
            }
            stages::write_back::wb_stage(self, latch);
        } else if self.redirect_point == RedirectPoint::WriteBack {
            self.pc += 1;
        }

        if self.warmup > 2 {
            let latch = self.ex_mem.take();
            let out = stages::memory_access::mem_stage(self, latch)?;
            if self.redirect_point == RedirectPoint::Memory {
                self.apply_redirect(out.as_ref().map(MemoryLatch::redirect));
            }
            self.mem_wb = out;
        } else if self.redirect_point == RedirectPoint::Memory {
            self.pc += 1;
        }

        if self.warmup > 1 {
            let latch = self.id_ex.take();
            let out = stages::execute::execute_stage(self, latch);
            if self.redirect_point == RedirectPoint::Execute {
                self.apply_redirect(out.as_ref().map(ExecuteLatch::redirect));
            }
            self.ex_mem = out;
        } else if self.redirect_point == RedirectPoint::Execute {
            self.pc += 1;
        }

        if self.warmup > 0 {
            let latch = self.if_id.take();
            self.id_ex = stages::decode::decode_stage(self, latch)?;
        }

        self.if_id = Some(stages::fetch::fetch_stage(self)?);

        if self.warmup < 4 {
            self.warmup += 1;
        }
        Ok(())
    }

    /// Applies the per-cycle PC action at the redirect point.
    ///
    /// Register-indirect jumps redirect to `rs1`, taken branches to the
    /// ALU output; both carry byte addresses, converted back to word
    /// indices here. Everything else, including an absent latch, falls
    /// through to the sequential increment.
    fn apply_redirect(&mut self, redirect: Option<Redirect>) {
        match redirect {
            Some(r) if r.reg_jump => self.pc = (r.rs1_val / 4) as i32,
            Some(r) if r.taken => self.pc = (r.alu_out / 4) as i32,
            _ => self.pc += 1,
        }
    }

    /// Current program counter as a word index.
    pub fn pc(&self) -> u32 {
        self.pc as u32
    }

    /// Reads a general-purpose register.
    pub fn reg(&self, idx: usize) -> Result<u32, Fault> {
        if idx >= 32 {
            return Err(Fault::RegisterOutOfRange(idx));
        }
        Ok(self.regs.read(idx))
    }

    /// Reads a word from data memory.
    pub fn mem(&self, addr: u32) -> Result<u32, Fault> {
        let idx = addr as usize;
        if idx >= DRAM_WORDS {
            return Err(Fault::DramAddressOutOfRange(addr));
        }
        Ok(self.dram[idx])
    }

    /// Address and data of the most recent load or store.
    ///
    /// Loads report zero data; stores report the stored value.
    pub fn last_mem_access(&self) -> (u32, u32) {
        (self.last_mem.addr, self.last_mem.data)
    }

    /// Prints the PC and the register file to stdout.
    pub fn dump_state(&self) {
        println!("PC = word {} ({:#010x})", self.pc, (self.pc as u32).wrapping_mul(4));
        self.regs.dump();
    }

    pub(crate) fn trace_enabled(&self) -> bool {
        cfg!(feature = "always-trace") || self.trace
    }

    /// Emits the per-cycle stage line consumed by the stepping front-end.
    pub(crate) fn trace_stage(&self, tag: &str, disasm: &str) {
        if self.trace_enabled() {
            if disasm.is_empty() {
                println!("[{}] NOP", tag);
            } else {
                println!("[{}] {}", tag, disasm);
            }
        }
    }
}
