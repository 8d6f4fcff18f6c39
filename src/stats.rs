//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, retired instructions, and the instruction mix
//! observed at the Writeback stage.

use serde::Serialize;
use std::time::Instant;

/// Simulation statistics.
///
/// Cycle and instruction counters accumulated while stepping; the
/// instruction mix is classified when an instruction retires in
/// Writeback, so pipeline bubbles and warm-up cycles never count.
#[derive(Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the simulation statistics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let ipc = self.instructions_retired as f64 / cyc as f64;

        println!("\n==========================================");
        println!("DLX PIPELINE SIMULATION STATISTICS");
        println!("==========================================");
        println!("host_seconds       {:.4} s", seconds);
        println!("sim_cycles         {}", self.cycles);
        println!("sim_insts          {}", self.instructions_retired);
        println!("sim_ipc            {:.4}", ipc);
        println!("------------------------------------------");
        println!("INSTRUCTION MIX");
        let total = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        } as f64;
        println!(
            "  op.alu           {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total) * 100.0
        );
        println!(
            "  op.load          {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total) * 100.0
        );
        println!(
            "  op.store         {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total) * 100.0
        );
        println!(
            "  op.branch        {} ({:.2}%)",
            self.inst_branch,
            (self.inst_branch as f64 / total) * 100.0
        );
        println!("  branches.taken   {}", self.branches_taken);
        println!("==========================================");
    }

    /// Serializes the counters as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
