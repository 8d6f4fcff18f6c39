use serde::Deserialize;

const DEFAULT_DELAY_SLOT_DEPTH: u8 = 3;

/// Top-level simulator configuration, loaded from a TOML file.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    /// Emit the per-cycle `[STAGE]` lines on stdout.
    #[serde(default = "default_trace_stages")]
    pub trace_stages: bool,
}

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline depth at which a branch updates the PC: 1 (Execute),
    /// 2 (Memory), or 3 (Writeback).
    #[serde(default = "default_delay_slot_depth")]
    pub delay_slot_depth: u8,

    /// Compute branch targets relative to the next sequential byte
    /// address instead of from zero.
    #[serde(default = "default_relative_jump")]
    pub relative_jump: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_stages: default_trace_stages(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delay_slot_depth: default_delay_slot_depth(),
            relative_jump: default_relative_jump(),
        }
    }
}

fn default_trace_stages() -> bool {
    true
}

fn default_delay_slot_depth() -> u8 {
    DEFAULT_DELAY_SLOT_DEPTH
}

fn default_relative_jump() -> bool {
    true
}
