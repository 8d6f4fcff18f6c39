use crate::core::cpu::{Cpu, IRAM_WORDS};
use crate::core::fault::Fault;
use crate::core::pipeline::FetchLatch;
use crate::isa::disasm::disassemble;

/// Instruction fetch.
///
/// Reads the word the PC points at and records the byte address of the
/// next sequential instruction. Fetch never touches the PC itself; PC
/// updates belong exclusively to the redirect policy in the driver.
pub fn fetch_stage(cpu: &mut Cpu) -> Result<FetchLatch, Fault> {
    let idx = cpu.pc;
    if idx < 0 || idx >= IRAM_WORDS as i32 {
        return Err(Fault::FetchOutOfRange(idx));
    }

    let inst = cpu.iram[idx as usize];
    let disasm = disassemble(inst);
    // The PC counts words; nextPC is the byte address of the following slot.
    let next_pc = ((idx + 1) * 4) as u32;

    cpu.trace_stage("FETCH", &disasm);
    Ok(FetchLatch {
        inst,
        next_pc,
        disasm,
    })
}
