//! Tunable parameters for a simulation run.

use std::time::Duration;

use mazerat_core::error::{MazeError, Result};
use mazerat_core::grid::CellGrid;
use mazerat_core::types::Tick;
use serde::{Deserialize, Serialize};

/// Configuration for the simulation engine.
///
/// The defaults reproduce the classic rules: a rat starves after
/// `3 x width x height` ticks and is caught once its stuck counter hits 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tick budget per cell of the maze (default: 3).
    pub starvation_multiplier: u64,
    /// Stuck counter value that ends the run (default: 3).
    pub stuck_limit: u32,
    /// Display pacing after each notification, in milliseconds (default: 0).
    pub step_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            starvation_multiplier: 3,
            stuck_limit: 3,
            step_delay_ms: 0,
        }
    }
}

impl SimulationConfig {
    /// Reject values that would make every run end on the first tick.
    pub fn validate(&self) -> Result<()> {
        if self.starvation_multiplier == 0 {
            return Err(MazeError::config("starvation_multiplier must be at least 1"));
        }
        if self.stuck_limit == 0 {
            return Err(MazeError::config("stuck_limit must be at least 1"));
        }
        Ok(())
    }

    /// Tick budget for a grid.
    pub fn max_ticks(&self, grid: &CellGrid) -> Tick {
        self.starvation_multiplier
            .saturating_mul(grid.cell_count() as Tick)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
