//! Step recording: the headings and positions of every rat, tick by tick.
//!
//! A [`StepRecord`] is filled in by the engine during a run and can be saved
//! next to the maze it came from, then handed to the
//! [`Player`](crate::player::Player) to replay the run without asking any
//! policy for a decision.

use mazerat_core::error::{MazeError, Result};
use mazerat_core::rat::RatState;
use mazerat_core::types::{Heading, Location};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const STEP_RECORD_VERSION: u32 = 1;

/// One tick: headings and positions indexed by rat registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub directions: Vec<Heading>,
    pub positions: Vec<Location>,
}

impl TickRecord {
    /// Capture the current heading and location of every rat.
    pub fn capture(rats: &[RatState]) -> Result<Self> {
        let mut directions = Vec::with_capacity(rats.len());
        let mut positions = Vec::with_capacity(rats.len());
        for (idx, rat) in rats.iter().enumerate() {
            let location = rat
                .location()
                .ok_or_else(|| MazeError::config(format!("rat {} has not been placed", idx)))?;
            directions.push(rat.heading());
            positions.push(location);
        }
        Ok(Self {
            directions,
            positions,
        })
    }

    pub fn rat_count(&self) -> usize {
        self.directions.len()
    }
}

/// The full sequence of ticks for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub version: u32,
    /// Policy names in rat order, informational only.
    #[serde(default)]
    pub policies: Vec<String>,
    pub ticks: Vec<TickRecord>,
}

impl Default for StepRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl StepRecord {
    pub fn new() -> Self {
        Self {
            version: STEP_RECORD_VERSION,
            policies: Vec::new(),
            ticks: Vec::new(),
        }
    }

    pub fn push(&mut self, tick: TickRecord) {
        self.ticks.push(tick);
    }

    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Number of rats, taken from the first tick.
    pub fn rat_count(&self) -> usize {
        self.ticks.first().map(TickRecord::rat_count).unwrap_or(0)
    }

    /// The last recorded tick, if any.
    pub fn last(&self) -> Option<&TickRecord> {
        self.ticks.last()
    }

    /// Check the version and that every tick lists the same number of rats
    /// in both of its lists.
    pub fn validate(&self) -> Result<()> {
        if self.version != STEP_RECORD_VERSION {
            return Err(MazeError::InvalidRecord(format!(
                "unsupported version {}, expected {}",
                self.version, STEP_RECORD_VERSION
            )));
        }
        let rats = self.rat_count();
        for (i, tick) in self.ticks.iter().enumerate() {
            if tick.directions.len() != rats || tick.positions.len() != rats {
                return Err(MazeError::InvalidRecord(format!(
                    "tick {} has {} directions and {} positions, expected {}",
                    i,
                    tick.directions.len(),
                    tick.positions.len(),
                    rats
                )));
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode and validate a persisted record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let record: StepRecord = serde_json::from_slice(bytes)?;
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(x: i32, y: i32, heading: Heading) -> RatState {
        let mut rat = RatState::new();
        rat.set_heading(heading);
        rat.set_location(Location::new(x, y));
        rat
    }

    #[test]
    fn capture_keeps_rat_order() {
        let rats = [placed(1, 1, Heading::North), placed(2, 3, Heading::West)];
        let tick = TickRecord::capture(&rats).unwrap();
        assert_eq!(tick.directions, vec![Heading::North, Heading::West]);
        assert_eq!(tick.positions, vec![Location::new(1, 1), Location::new(2, 3)]);
    }

    #[test]
    fn capture_rejects_unplaced_rat() {
        let rats = [placed(1, 1, Heading::North), RatState::new()];
        assert!(matches!(TickRecord::capture(&rats), Err(MazeError::Config(_))));
    }

    #[test]
    fn wire_format_uses_degrees_and_xy() {
        let mut record = StepRecord::new();
        record.policies.push("dumb".into());
        record.push(TickRecord::capture(&[placed(1, 2, Heading::South)]).unwrap());

        let json: serde_json::Value = serde_json::from_slice(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["ticks"][0]["directions"][0], 180);
        assert_eq!(json["ticks"][0]["positions"][0]["x"], 1);
        assert_eq!(json["ticks"][0]["positions"][0]["y"], 2);
    }

    #[test]
    fn policies_are_optional_on_load() {
        let json = br#"{"version":1,"ticks":[{"directions":[90],"positions":[{"x":1,"y":1}]}]}"#;
        let record = StepRecord::from_bytes(json).unwrap();
        assert!(record.policies.is_empty());
        assert_eq!(record.rat_count(), 1);
    }

    #[test]
    fn ragged_ticks_are_rejected() {
        let json = br#"{"version":1,"ticks":[
            {"directions":[90],"positions":[{"x":1,"y":1}]},
            {"directions":[90,0],"positions":[{"x":1,"y":1},{"x":2,"y":1}]}
        ]}"#;
        assert!(matches!(
            StepRecord::from_bytes(json),
            Err(MazeError::InvalidRecord(_))
        ));

        let json = br#"{"version":2,"ticks":[]}"#;
        assert!(matches!(
            StepRecord::from_bytes(json),
            Err(MazeError::InvalidRecord(_))
        ));
    }

    #[test]
    fn bad_heading_is_a_serialization_error() {
        let json = br#"{"version":1,"ticks":[{"directions":[45],"positions":[{"x":1,"y":1}]}]}"#;
        assert!(matches!(
            StepRecord::from_bytes(json),
            Err(MazeError::Serialization(_))
        ));
    }
}
