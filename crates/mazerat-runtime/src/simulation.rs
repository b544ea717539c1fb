//! Simulation: the tick loop that drives every rat through the maze.
//!
//! One tick is two phases over the rats in registration order:
//!
//! 1. **Decide**: each rat looks around and its policy may turn it in place.
//!    Views get a direction update afterwards.
//! 2. **Move**: each rat looks again and steps forward unless it faces a
//!    wall, in which case it is moved onto its own cell so the stuck counter
//!    sees it. Moves apply one rat at a time, so a rat sees where earlier rats
//!    went this tick. A stuck rat aborts the whole run; a rat on the
//!    destination ends it at once.
//!
//! A run ends in exactly one way: success with the tick count, or a
//! `Stuck`, `Starved` or `Cancelled` error. A maze whose border has been
//! opened up fails with `Config`, before the first tick when a rat already
//! stands on the edge and otherwise as soon as one walks onto it.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mazerat_core::error::{MazeError, Result};
use mazerat_core::geometry::Surroundings;
use mazerat_core::grid::CellGrid;
use mazerat_core::policy::Policy;
use mazerat_core::rat::{Rat, RatState};
use mazerat_core::types::{Location, Tick};
use mazerat_core::view::{Frame, MazeView, UpdateKind};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::record::{StepRecord, TickRecord};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Idle,
    Running,
    Succeeded,
    Stuck,
    Starved,
    Cancelled,
    /// A rat walked onto an open border cell and could not look around.
    Failed,
}

impl RunState {
    /// Terminal states need a `reset()` before the engine can run again.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunState::Idle | RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Succeeded => "succeeded",
            RunState::Stuck => "stuck",
            RunState::Starved => "starved",
            RunState::Cancelled => "cancelled",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Every rat moved (or bumped a wall) and nobody arrived.
    Moved,
    /// The rat at this index reached the destination.
    Reached { rat: usize },
}

/// Shared flag for stopping a run from another thread.
///
/// Checked once per tick, before the decide phase.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// The simulation engine: one maze, its rats, and the views watching them.
pub struct Simulation {
    grid: CellGrid,
    rats: Vec<Rat>,
    views: Vec<Box<dyn MazeView>>,
    record: StepRecord,
    tick: Tick,
    state: RunState,
    config: SimulationConfig,
}

impl Simulation {
    /// Create an engine with default configuration.
    pub fn new(grid: CellGrid) -> Self {
        Self {
            grid,
            rats: Vec::new(),
            views: Vec::new(),
            record: StepRecord::new(),
            tick: 0,
            state: RunState::Idle,
            config: SimulationConfig::default(),
        }
    }

    /// Create an engine with the given configuration.
    pub fn from_config(grid: CellGrid, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mut sim = Self::new(grid);
        sim.config = config;
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Mutable access for editing the maze between runs.
    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    pub fn rats(&self) -> &[Rat] {
        &self.rats
    }

    /// Copies of every rat's state, in registration order.
    pub fn states(&self) -> Vec<RatState> {
        self.rats.iter().map(|r| *r.state()).collect()
    }

    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn record(&self) -> &StepRecord {
        &self.record
    }

    /// Hand over the step record, leaving an empty one behind.
    pub fn take_record(&mut self) -> StepRecord {
        std::mem::take(&mut self.record)
    }

    /// Attach a view for the lifetime of the engine.
    pub fn add_view(&mut self, view: Box<dyn MazeView>) {
        self.views.push(view);
    }

    /// Place a new rat on the start cell and append it to the roster.
    ///
    /// Returns the rat's index, which is also its position in every
    /// recorded tick.
    pub fn add_rat(&mut self, policy: Box<dyn Policy>) -> Result<usize> {
        if self.state != RunState::Idle {
            return Err(MazeError::config(format!(
                "cannot add a rat to a {} maze; reset it first",
                self.state
            )));
        }
        let start = self.grid.start()?;
        let mut rat = Rat::new(policy);
        rat.state_mut().set_location(start);

        let idx = self.rats.len();
        debug!(rat = idx, policy = rat.policy_name(), %start, "Added rat");
        self.record.policies.push(rat.policy_name().to_string());
        self.rats.push(rat);
        self.notify(UpdateKind::FullRedraw);
        Ok(idx)
    }

    /// Drop all rats and the step record, keep the grid, and return to idle.
    pub fn reset(&mut self) {
        self.tick = 0;
        self.rats.clear();
        self.record = StepRecord::new();
        self.state = RunState::Idle;
        self.notify(UpdateKind::FullRedraw);
    }

    /// Run until a rat arrives, one gets stuck, or the tick budget runs out.
    ///
    /// Returns the 1-based tick on which a rat reached the destination.
    pub fn run(&mut self, step_delay: Duration) -> Result<Tick> {
        self.run_cancellable(step_delay, &CancelToken::new())
    }

    /// As [`run`](Self::run), checking `cancel` before every tick.
    pub fn run_cancellable(&mut self, step_delay: Duration, cancel: &CancelToken) -> Result<Tick> {
        let destination = self.ensure_ready()?;
        let max_ticks = self.config.max_ticks(&self.grid);
        self.state = RunState::Running;
        info!(
            rats = self.rats.len(),
            max_ticks,
            width = self.grid.width(),
            height = self.grid.height(),
            "Starting run"
        );

        while self.tick < max_ticks {
            if cancel.is_cancelled() {
                self.state = RunState::Cancelled;
                warn!(tick = self.tick, "Run cancelled");
                return Err(MazeError::Cancelled { tick: self.tick });
            }
            if let TickOutcome::Reached { rat } = self.guarded_advance(destination, step_delay)? {
                info!(tick = self.tick, rat, "Rat reached the destination");
                return Ok(self.tick);
            }
        }

        self.state = RunState::Starved;
        warn!(max_ticks, "Rats starved");
        Err(MazeError::Starved { max_ticks })
    }

    /// Run exactly one tick without pacing.
    ///
    /// Fails with `Starved` once the tick budget is spent.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let destination = self.ensure_ready()?;
        let max_ticks = self.config.max_ticks(&self.grid);
        if self.tick >= max_ticks {
            self.state = RunState::Starved;
            return Err(MazeError::Starved { max_ticks });
        }
        self.state = RunState::Running;
        self.guarded_advance(destination, Duration::ZERO)
    }

    fn ensure_ready(&self) -> Result<Location> {
        if self.state.is_terminal() {
            return Err(MazeError::config(format!(
                "the maze run already {}; reset it before running again",
                self.state
            )));
        }
        if self.rats.is_empty() {
            return Err(MazeError::config("No rats have been added to the maze"));
        }
        let destination = self.grid.destination()?;
        for idx in 0..self.rats.len() {
            if let Err(err) = self.surroundings(idx) {
                return Err(MazeError::config(format!(
                    "rat {} cannot see around itself: {}",
                    idx, err
                )));
            }
        }
        Ok(destination)
    }

    /// Any error `advance` leaves unhandled ends the run in `Failed`.
    fn guarded_advance(&mut self, destination: Location, step_delay: Duration) -> Result<TickOutcome> {
        self.advance(destination, step_delay).map_err(|err| {
            if self.state.is_terminal() {
                return err;
            }
            self.state = RunState::Failed;
            warn!(tick = self.tick, error = %err, "Run failed");
            match err {
                MazeError::OutOfBounds { x, y, .. } => MazeError::config(format!(
                    "a rat looked past the edge of the maze at ({}, {}); the border is open",
                    x, y
                )),
                other => other,
            }
        })
    }

    /// Both phases of one tick. Updates the run state on success or stuck.
    fn advance(&mut self, destination: Location, step_delay: Duration) -> Result<TickOutcome> {
        self.tick += 1;

        // Decide phase
        for idx in 0..self.rats.len() {
            let view = self.surroundings(idx)?;
            let turn = self.rats[idx].decide(&view);
            debug!(tick = self.tick, rat = idx, %turn, heading = %self.rats[idx].state().heading(), "Decided");
        }
        self.notify(UpdateKind::Direction);
        pause(step_delay);

        // Move phase
        for idx in 0..self.rats.len() {
            let view = self.surroundings(idx)?;
            let next = if view.front.is_wall {
                view.here
            } else {
                view.front.location
            };
            let state = self.rats[idx].state_mut();
            state.set_location(next);

            if state.same_location_count() >= self.config.stuck_limit {
                self.state = RunState::Stuck;
                warn!(tick = self.tick, rat = idx, location = %next, "Rat stuck");
                return Err(MazeError::Stuck {
                    tick: self.tick,
                    rat: idx,
                    location: next,
                });
            }

            if next == destination {
                self.state = RunState::Succeeded;
                self.record_tick()?;
                self.notify(UpdateKind::Location);
                pause(step_delay);
                return Ok(TickOutcome::Reached { rat: idx });
            }
        }

        self.record_tick()?;
        self.notify(UpdateKind::Location);
        pause(step_delay);
        Ok(TickOutcome::Moved)
    }

    fn surroundings(&self, idx: usize) -> Result<Surroundings> {
        let state = self.rats[idx].state();
        let here = state
            .location()
            .ok_or_else(|| MazeError::config(format!("rat {} has not been placed", idx)))?;
        Surroundings::snapshot(&self.grid, here, state.heading())
    }

    fn record_tick(&mut self) -> Result<()> {
        let tick = TickRecord::capture(&self.states())?;
        self.record.push(tick);
        Ok(())
    }

    fn notify(&mut self, kind: UpdateKind) {
        if self.views.is_empty() {
            return;
        }
        let states = self.states();
        let frame = Frame {
            grid: &self.grid,
            rats: &states,
            tick: self.tick,
        };
        for view in self.views.iter_mut() {
            view.notify(kind, &frame);
        }
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("state", &self.state)
            .field("rats", &self.rats)
            .field("views", &self.views.len())
            .finish()
    }
}

pub(crate) fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
