use crate::core::cpu::{Cpu, MemAccess, DRAM_WORDS};
use crate::core::fault::Fault;
use crate::core::pipeline::{ExecuteLatch, MemoryLatch};

/// Memory access.
///
/// Loads read `DRAM[alu_out]`, stores write `rs2` there; the ALU output
/// is a word index into data memory. Every access updates the last-access
/// record. Loads record zero data. The bounds check precedes any
/// mutation.
pub fn mem_stage(cpu: &mut Cpu, input: Option<ExecuteLatch>) -> Result<Option<MemoryLatch>, Fault> {
    let Some(ex) = input else {
        return Ok(None);
    };

    let mut dram_out = 0;
    if ex.ctrl.mem_read {
        let addr = dram_index(ex.alu_out)?;
        dram_out = cpu.dram[addr];
        cpu.last_mem = MemAccess {
            addr: ex.alu_out,
            data: 0,
        };
    } else if ex.ctrl.mem_write {
        let addr = dram_index(ex.alu_out)?;
        cpu.dram[addr] = ex.rs2_val;
        cpu.last_mem = MemAccess {
            addr: ex.alu_out,
            data: ex.rs2_val,
        };
    }

    cpu.trace_stage("MEM", &ex.disasm);
    Ok(Some(MemoryLatch {
        dram_out,
        alu_out: ex.alu_out,
        rd: ex.rd,
        next_pc: ex.next_pc,
        rs1_val: ex.rs1_val,
        taken: ex.taken,
        ctrl: ex.ctrl,
        disasm: ex.disasm,
    }))
}

fn dram_index(addr: u32) -> Result<usize, Fault> {
    if (addr as usize) < DRAM_WORDS {
        Ok(addr as usize)
    } else {
        Err(Fault::DramAddressOutOfRange(addr))
    }
}
