//! Mazerat Runtime Prelude: the engine plus everything needed to feed it.

pub use mazerat_agents::prelude::*;
pub use mazerat_core::prelude::*;

pub use crate::config::SimulationConfig;
pub use crate::event_log::{EventLog, ViewEvent};
pub use crate::player::Player;
pub use crate::record::{StepRecord, TickRecord, STEP_RECORD_VERSION};
pub use crate::simulation::{CancelToken, RunState, Simulation, TickOutcome};
pub use crate::store::{load_grid, load_steps, save_grid, save_steps, steps_path_for};
