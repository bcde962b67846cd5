//! Pen input boundary types, as delivered by the host shell.

use inkcast_core::stroke::{Milliseconds, Point};

/// Which part of a pen contact this event marks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenPhase {
    /// Pen touched down - begins a stroke.
    Down,
    /// Pen moved while touching.
    Move,
    /// Pen lifted - ends the stroke.
    Up,
}

/// One sampled pen event from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenEvent {
    pub phase: PenPhase,
    pub pos: [f32; 2],
    pub pressure: f32,
    /// Zero when the digitizer doesn't report tilt.
    pub tilt: f32,
    /// Absolute monotonic host time of the sample.
    pub time: Milliseconds,
}
impl PenEvent {
    /// The event's payload as a stroke point (pressure clamped).
    #[must_use]
    pub fn sample(&self) -> Point {
        Point::new(self.pos, self.pressure, self.tilt, self.time)
    }
}
