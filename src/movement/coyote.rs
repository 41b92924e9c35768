//! Movement domain: coyote-time grace window after leaving a ledge.

use bevy::prelude::*;
use std::time::Duration;

/// Idle when `active` is `None`. Cancelling drops the timer synchronously,
/// so a later `tick` can never fire a stale completion.
#[derive(Debug, Clone, Default)]
pub struct CoyoteTimer {
    active: Option<Timer>,
}

impl CoyoteTimer {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Seconds left before the grace window closes, if running.
    pub fn remaining_secs(&self) -> Option<f32> {
        self.active.as_ref().map(Timer::remaining_secs)
    }

    pub fn start(&mut self, coyote_time: f32) {
        self.active = Some(Timer::from_seconds(coyote_time, TimerMode::Once));
    }

    /// Returns whether a running timer was torn down.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Advance by real elapsed time. Returns `true` exactly once, on the tick
    /// the window closes; the timer is idle afterwards.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.active.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.is_finished() {
            self.active = None;
            true
        } else {
            false
        }
    }
}
