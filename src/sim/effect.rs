//! Balloon low-gravity buff
//!
//! Single timed effect with an absolute deadline. While the match is paused the
//! deadline is parked and the live end time is set to "never".

use serde::{Deserialize, Serialize};

/// Live end time while frozen
pub const NEVER: f64 = f64::INFINITY;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTimer {
    active: bool,
    end_time: f64,
    /// (saved deadline, freeze timestamp) while paused
    frozen: Option<(f64, f64)>,
}

impl Default for EffectTimer {
    fn default() -> Self {
        Self {
            active: false,
            end_time: 0.0,
            frozen: None,
        }
    }
}

impl EffectTimer {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }

    /// Start (or refresh) the buff
    pub fn activate(&mut self, now: f64, duration: f64) {
        self.active = true;
        self.end_time = now + duration;
    }

    /// Deactivate once `now` is past the deadline. Returns true on expiry.
    pub fn expire_if_due(&mut self, now: f64) -> bool {
        if self.active && now > self.end_time {
            self.active = false;
            return true;
        }
        false
    }

    /// Park the deadline (on pause)
    pub fn freeze(&mut self, now: f64) {
        if self.active && self.frozen.is_none() {
            self.frozen = Some((self.end_time, now));
            self.end_time = NEVER;
        }
    }

    /// Restore the parked deadline pushed back by the pause length
    pub fn thaw(&mut self, pause_duration: f64) {
        if let Some((saved_end, _)) = self.frozen.take() {
            if self.active {
                self.end_time = saved_end + pause_duration;
            }
        }
    }

    /// Milliseconds left, `None` when inactive. Frozen timers report the
    /// time that was left when they were frozen.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let left = match self.frozen {
            Some((saved_end, frozen_at)) => saved_end - frozen_at,
            None => self.end_time - now,
        };
        Some(left.max(0.0))
    }
}
