//! Emergency and maintenance mode control.
//!
//! Turning either mode on preempts everything: the queue is flushed and the
//! car is halted on the spot, in the same call.  Turning a mode off restores
//! nothing; the car simply waits for new requests.

use lift_core::{Mode, Modes};
use lift_dispatch::RequestQueue;
use lift_motion::{MotionEngine, Trip};

/// The effect of one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub mode:        Mode,
    /// The mode's value after the toggle.
    pub active:      bool,
    /// Requests dropped from the queue.
    pub flushed:     usize,
    /// Trip cut short, if the car was moving.
    pub interrupted: Option<Trip>,
}

impl ModeChange {
    /// Operator log line for this change.
    pub fn message(&self) -> String {
        match (self.mode, self.active) {
            (Mode::Emergency, true)    => "EMERGENCY MODE ACTIVATED".to_string(),
            (Mode::Emergency, false)   => "Emergency mode deactivated".to_string(),
            (Mode::Maintenance, true)  => "Maintenance mode activated".to_string(),
            (Mode::Maintenance, false) => "Maintenance mode deactivated".to_string(),
        }
    }
}

/// Owns the override flags.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    modes: Modes,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn modes(&self) -> Modes {
        self.modes
    }

    /// Flip `mode`.  Switching it on flushes `queue` and halts `motion`.
    pub fn toggle(
        &mut self,
        mode:   Mode,
        queue:  &mut RequestQueue,
        motion: &mut MotionEngine,
    ) -> ModeChange {
        let active = self.modes.toggle(mode);
        if !active {
            return ModeChange { mode, active, flushed: 0, interrupted: None };
        }
        let flushed = queue.clear();
        let interrupted = motion.halt();
        ModeChange { mode, active, flushed, interrupted }
    }

    /// Turn both modes off (system reset).
    pub fn clear(&mut self) {
        self.modes = Modes::default();
    }
}
