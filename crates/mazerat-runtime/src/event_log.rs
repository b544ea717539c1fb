//! A view that remembers every notification it receives.
//!
//! Handy for headless runs and tests: clone the log, hand one copy to the
//! engine or player as a view, and read the events back from the other.

use std::cell::RefCell;
use std::rc::Rc;

use mazerat_core::types::{Heading, Location, Tick};
use mazerat_core::view::{Frame, MazeView, UpdateKind};

/// One notification as seen by the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub kind: UpdateKind,
    pub tick: Tick,
    pub headings: Vec<Heading>,
    pub locations: Vec<Option<Location>>,
}

/// Recording view. Clones share the same event list.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// How many events of one kind were logged.
    pub fn count(&self, kind: UpdateKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }

    /// The kinds in arrival order.
    pub fn kinds(&self) -> Vec<UpdateKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, kind: UpdateKind, frame: &Frame<'_>) {
        self.events.borrow_mut().push(ViewEvent {
            kind,
            tick: frame.tick,
            headings: frame.rats.iter().map(|r| r.heading()).collect(),
            locations: frame.rats.iter().map(|r| r.location()).collect(),
        });
    }
}

impl MazeView for EventLog {
    fn on_direction_changed(&mut self, frame: &Frame<'_>) {
        self.push(UpdateKind::Direction, frame);
    }

    fn on_location_changed(&mut self, frame: &Frame<'_>) {
        self.push(UpdateKind::Location, frame);
    }

    fn on_full_redraw(&mut self, frame: &Frame<'_>) {
        self.push(UpdateKind::FullRedraw, frame);
    }
}
