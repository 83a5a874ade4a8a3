//! Pause bookkeeping
//!
//! Records when a pause began so every time-relative value (spawn timers,
//! effect deadline) can be shifted by the frozen duration on resume.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PauseController {
    started_at: Option<f64>,
}

impl PauseController {
    pub fn is_paused(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn begin(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    /// End the pause and return its duration (0 if not paused)
    pub fn end(&mut self, now: f64) -> f64 {
        self.started_at
            .take()
            .map(|start| (now - start).max(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_duration() {
        let mut pause = PauseController::default();
        pause.begin(1000.0);
        assert!(pause.is_paused());
        assert_eq!(pause.end(4500.0), 3500.0);
        assert!(!pause.is_paused());
        assert_eq!(pause.end(9000.0), 0.0);
    }
}
