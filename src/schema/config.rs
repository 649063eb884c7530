//! Configuration types for elementary automaton runs.

use serde::{Deserialize, Serialize};

use super::SeedPolicy;

/// Default minimum duration of one scroll step, in milliseconds.
fn default_step_ms() -> u64 {
    100
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Row width in cells.
    pub num_cells: usize,
    /// Number of rows (time depth; window height in scroll mode).
    pub num_time: usize,
    /// Wolfram rule number (0-255).
    pub rule: u32,
    /// Policy for populating the starting row.
    #[serde(default)]
    pub seed: SeedPolicy,
    /// Evolution discipline: fill a fixed board once, or scroll a window.
    #[serde(default)]
    pub mode: EvolutionMode,
    /// Minimum duration of one scroll step, in milliseconds.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_cells: 80,
            num_time: 80,
            rule: 30,
            seed: SeedPolicy::default(),
            mode: EvolutionMode::default(),
            step_ms: default_step_ms(),
        }
    }
}

/// How a board advances through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvolutionMode {
    /// Seed row 0, fill the remaining rows once; the board is then final.
    #[default]
    Batch,
    /// Seed the bottom row and advance a fixed-height window indefinitely,
    /// discarding the oldest row each step.
    Scroll,
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_cells == 0 || self.num_time == 0 {
            return Err(ConfigError::InvalidDimensions {
                num_cells: self.num_cells,
                num_time: self.num_time,
            });
        }
        if self.rule > 255 {
            return Err(ConfigError::InvalidRule(i64::from(self.rule)));
        }
        if let SeedPolicy::WeightedRandom { weight } = self.seed {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::InvalidWeight(weight));
            }
        }
        // A scroll window derives each new bottom row from the row above it,
        // so it needs at least two rows to work with.
        if self.mode == EvolutionMode::Scroll && self.num_time < 2 {
            return Err(ConfigError::ScrollWindowTooShallow(self.num_time));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Rule number {0} is outside 0-255")]
    InvalidRule(i64),
    #[error("Board dimensions must be non-zero (got {num_cells} cells, {num_time} rows)")]
    InvalidDimensions { num_cells: usize, num_time: usize },
    #[error("Seeding weight {0} is outside 0.0-1.0")]
    InvalidWeight(f64),
    #[error("Scroll mode needs a window of at least 2 rows (got {0})")]
    ScrollWindowTooShallow(usize),
}
