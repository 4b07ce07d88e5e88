use std::time::Duration;

use serde::Serialize;

use crate::error::{Result, WardrobeError};

/// Delay between two rotation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
/// Degrees the display turns per tick.
pub const DEGREES_PER_TICK: u16 = 5;
pub const FULL_TURN: u16 = 360;

/// Angle and running flag of the rotating display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RotationState {
    pub angle: u16,
    pub running: bool,
}

/// Outcome of one tick of a running rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub angle: u16,
    /// The angle wrapped back to zero: one full sweep finished.
    pub sweep_completed: bool,
}

/// Timed display state machine: `Idle` or `Running`.
///
/// The machine only tracks the angle. Deciding what to show after a sweep is
/// up to the owner, which calls [`Rotation::halt`] when there is nothing left.
#[derive(Debug, Clone)]
pub struct Rotation {
    state: RotationState,
    step: u16,
}

impl Rotation {
    /// Create an idle rotation turning `step` degrees per tick.
    ///
    /// `step` must be non-zero and divide 360 so every sweep lands exactly on
    /// zero after [`Rotation::ticks_per_sweep`] ticks.
    pub fn new(step: u16) -> Result<Self> {
        if step == 0 || FULL_TURN % step != 0 {
            return Err(WardrobeError::InvalidStep(step));
        }
        Ok(Self {
            state: RotationState::default(),
            step,
        })
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Ticks in one full sweep.
    pub fn ticks_per_sweep(&self) -> u32 {
        u32::from(FULL_TURN / self.step)
    }

    /// Move to `Running`. Returns `false` if it already was.
    pub fn begin(&mut self) -> bool {
        let was_running = self.state.running;
        self.state.running = true;
        !was_running
    }

    /// Move to `Idle`, keeping the angle. Returns whether it was running.
    pub fn halt(&mut self) -> bool {
        let was_running = self.state.running;
        self.state.running = false;
        was_running
    }

    /// Turn one step. Idle rotations do not move and return `None`.
    pub fn advance(&mut self) -> Option<Advance> {
        if !self.state.running {
            return None;
        }
        self.state.angle = (self.state.angle + self.step) % FULL_TURN;
        Some(Advance {
            angle: self.state.angle,
            sweep_completed: self.state.angle == 0,
        })
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            state: RotationState::default(),
            step: DEGREES_PER_TICK,
        }
    }
}
