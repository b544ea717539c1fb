//! View notifications: how a maze tells its displays that something changed.
//!
//! The engine and the player both drive views through the same three
//! callbacks. Each callback receives a [`Frame`] describing the maze and
//! every rat at that moment; views that do not care about a kind of event
//! just keep the default no-op.

use crate::grid::CellGrid;
use crate::rat::RatState;
use crate::types::Tick;

/// The kind of update a view is being told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    /// Rat headings may have changed.
    Direction,
    /// Rat locations may have changed.
    Location,
    /// Everything should be drawn again.
    FullRedraw,
}

/// Read-only picture of the maze handed to views.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a CellGrid,
    pub rats: &'a [RatState],
    pub tick: Tick,
}

/// A display attached to a maze for its whole lifetime.
pub trait MazeView {
    fn on_direction_changed(&mut self, _frame: &Frame<'_>) {}

    fn on_location_changed(&mut self, _frame: &Frame<'_>) {}

    fn on_full_redraw(&mut self, _frame: &Frame<'_>) {}

    /// Route an update to the matching callback.
    fn notify(&mut self, kind: UpdateKind, frame: &Frame<'_>) {
        match kind {
            UpdateKind::Direction => self.on_direction_changed(frame),
            UpdateKind::Location => self.on_location_changed(frame),
            UpdateKind::FullRedraw => self.on_full_redraw(frame),
        }
    }
}
