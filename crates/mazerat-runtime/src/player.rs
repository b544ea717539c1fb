//! Playback of a recorded run.
//!
//! The player rebuilds one rat per index of the first recorded tick and
//! replays headings and positions in order, notifying views with the same
//! cadence as a live run. No policy is consulted.

use std::time::Duration;

use mazerat_core::error::{MazeError, Result};
use mazerat_core::grid::CellGrid;
use mazerat_core::rat::RatState;
use mazerat_core::types::Tick;
use mazerat_core::view::{Frame, MazeView, UpdateKind};
use tracing::{debug, info};

use crate::record::StepRecord;
use crate::simulation::{pause, CancelToken};

/// Replays a [`StepRecord`] against the maze it was recorded on.
pub struct Player {
    grid: CellGrid,
    views: Vec<Box<dyn MazeView>>,
}

impl Player {
    pub fn new(grid: CellGrid) -> Self {
        Self {
            grid,
            views: Vec::new(),
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn add_view(&mut self, view: Box<dyn MazeView>) {
        self.views.push(view);
    }

    /// Replay every tick. Returns the final state of each rat.
    pub fn play(&mut self, record: &StepRecord, step_delay: Duration) -> Result<Vec<RatState>> {
        self.play_cancellable(record, step_delay, &CancelToken::new())
    }

    /// As [`play`](Self::play), stopping with `Cancelled` when `cancel` is set.
    pub fn play_cancellable(
        &mut self,
        record: &StepRecord,
        step_delay: Duration,
        cancel: &CancelToken,
    ) -> Result<Vec<RatState>> {
        record.validate()?;
        let mut rats = vec![RatState::new(); record.rat_count()];
        info!(ticks = record.len(), rats = rats.len(), "Playing recorded run");
        self.notify(UpdateKind::FullRedraw, &rats, 0);

        for (i, tick) in record.ticks().iter().enumerate() {
            let tick_no = i as Tick + 1;
            if cancel.is_cancelled() {
                return Err(MazeError::Cancelled { tick: i as Tick });
            }

            for (rat, heading) in rats.iter_mut().zip(&tick.directions) {
                rat.set_heading(*heading);
            }
            self.notify(UpdateKind::Direction, &rats, tick_no);
            pause(step_delay);

            for (rat, location) in rats.iter_mut().zip(&tick.positions) {
                if !self.grid.contains(location) {
                    return Err(MazeError::OutOfBounds {
                        x: location.x,
                        y: location.y,
                        width: self.grid.width(),
                        height: self.grid.height(),
                    });
                }
                rat.set_location(*location);
            }
            self.notify(UpdateKind::Location, &rats, tick_no);
            pause(step_delay);
        }

        debug!("Playback finished");
        Ok(rats)
    }

    fn notify(&mut self, kind: UpdateKind, rats: &[RatState], tick: Tick) {
        let frame = Frame {
            grid: &self.grid,
            rats,
            tick,
        };
        for view in self.views.iter_mut() {
            view.notify(kind, &frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TickRecord;
    use mazerat_core::types::{Heading, Location};

    fn record(ticks: &[(Heading, Location)]) -> StepRecord {
        let mut record = StepRecord::new();
        for &(heading, location) in ticks {
            record.push(TickRecord {
                directions: vec![heading],
                positions: vec![location],
            });
        }
        record
    }

    #[test]
    fn final_state_matches_last_tick() {
        let grid = CellGrid::new(6, 6).unwrap();
        let rec = record(&[
            (Heading::East, Location::new(2, 1)),
            (Heading::North, Location::new(2, 2)),
            (Heading::North, Location::new(2, 3)),
        ]);
        let rats = Player::new(grid).play(&rec, Duration::ZERO).unwrap();
        assert_eq!(rats.len(), 1);
        assert_eq!(rats[0].heading(), Heading::North);
        assert_eq!(rats[0].location(), Some(Location::new(2, 3)));
        assert_eq!(rats[0].last_location(), Some(Location::new(2, 2)));
    }

    #[test]
    fn empty_record_plays_nothing() {
        let grid = CellGrid::new(4, 4).unwrap();
        let rats = Player::new(grid).play(&StepRecord::new(), Duration::ZERO).unwrap();
        assert!(rats.is_empty());
    }

    #[test]
    fn positions_outside_the_grid_are_rejected() {
        let grid = CellGrid::new(4, 4).unwrap();
        let rec = record(&[(Heading::East, Location::new(9, 1))]);
        let err = Player::new(grid).play(&rec, Duration::ZERO).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds { x: 9, y: 1, .. }));
    }
}
