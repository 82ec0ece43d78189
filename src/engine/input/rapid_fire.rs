// Rapid fire: turns a held button into timed repeat pulses

use super::config::RapidFireTiming;
use log::debug;
use std::time::Instant;

/// Where the state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RapidFirePhase {
    /// Button released
    Idle,
    /// Button held, waiting out the initial delay
    Pressed,
    /// Button held past the initial delay, repeating
    Repeating,
}

/// Per-player auto-repeat state.
///
/// A tap fires once immediately. Holding the button fires again after
/// `initial_delay`, then every `repeat_interval` until released.
#[derive(Debug, Clone, Default)]
pub struct RapidFireState {
    pressed_since: Option<Instant>,
    reached_threshold: bool,
}

impl RapidFireState {
    /// Create an idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one frame.
    /// Returns true when a fire pulse should be emitted this frame.
    pub fn update(&mut self, pressed: bool, now: Instant, timing: &RapidFireTiming) -> bool {
        if !pressed {
            self.reset();
            return false;
        }

        let Some(since) = self.pressed_since else {
            self.pressed_since = Some(now);
            self.reached_threshold = false;
            return true;
        };

        let elapsed = now.saturating_duration_since(since);
        let wait = if self.reached_threshold {
            timing.repeat_interval
        } else {
            timing.initial_delay
        };

        if elapsed > wait {
            if !self.reached_threshold {
                debug!("Rapid fire threshold reached after {:?}", elapsed);
            }
            self.reached_threshold = true;
            self.pressed_since = Some(now);
            true
        } else {
            false
        }
    }

    /// Return to idle
    pub fn reset(&mut self) {
        self.pressed_since = None;
        self.reached_threshold = false;
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> RapidFirePhase {
        match (self.pressed_since, self.reached_threshold) {
            (None, _) => RapidFirePhase::Idle,
            (Some(_), false) => RapidFirePhase::Pressed,
            (Some(_), true) => RapidFirePhase::Repeating,
        }
    }
}
