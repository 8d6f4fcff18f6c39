//! DLX Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line
//! argument parsing, program loading, and the batch stepping loop.
//!
//! # Usage
//!
//! Load a hex program listing and run it for a fixed number of cycles:
//!
//! ```text
//! dlx-emulator --file program.mem --cycles 64
//! ```
//!
//! Each cycle prints one `[STAGE]` line per active pipeline stage; the
//! final register file and the simulation statistics follow.

use clap::Parser;
use std::{fs, process};

extern crate dlx_emulator;

use dlx_emulator::config::Config;
use dlx_emulator::core::Cpu;
use dlx_emulator::sim::loader;

/// Command-line arguments for the DLX pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "DLX 5-stage pipeline simulator")]
struct Args {
    /// TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Hex program listing, one 32-bit word per token.
    #[arg(short, long)]
    file: String,

    /// Number of clock cycles to run.
    #[arg(short = 'n', long, default_value_t = 64)]
    cycles: u64,

    /// Print the statistics as JSON instead of the text summary.
    #[arg(long)]
    stats_json: bool,
}

/// Main entry point for the DLX pipeline simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and, when given,
///    the TOML configuration file.
/// 2. **Loader**: Parses the hex listing and places it in instruction
///    memory starting at word 0.
/// 3. **Simulation Loop**: Resets the CPU, then steps cycle-by-cycle
///    until the requested cycle count or a fatal fault.
/// 4. **Teardown**: Dumps the register file and prints statistics.
fn main() {
    let args = Args::parse();

    let config: Config = match args.config {
        Some(ref path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("\n[!] FATAL: Could not read config '{}': {}", path, e);
                process::exit(1);
            });
            toml::from_str(&content).unwrap_or_else(|e| {
                eprintln!("\n[!] FATAL: Could not parse config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    let mut cpu = Cpu::new(&config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    });

    let program = loader::load_hex_program(&args.file);
    println!("[Loader] {} words from {}", program.len(), args.file);
    for (index, word) in program.iter().enumerate() {
        if let Err(e) = cpu.load_instruction(index, *word) {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }
    }

    cpu.reset();

    for _ in 0..args.cycles {
        if let Err(e) = cpu.step() {
            eprintln!("\n[!] FATAL FAULT: {}", e);
            cpu.dump_state();
            cpu.stats.print();
            process::exit(1);
        }
    }

    cpu.dump_state();
    if args.stats_json {
        println!("{}", cpu.stats.to_json());
    } else {
        cpu.stats.print();
    }
}
