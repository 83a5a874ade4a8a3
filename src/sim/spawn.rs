//! Time-gated spawn scheduling
//!
//! Each category keeps the timestamp of its last spawn attempt. A category is
//! due once the score-dependent interval has elapsed; the timer resets on every
//! attempt, including attempts the factory declines.

use serde::{Deserialize, Serialize};

use super::state::Category;
use crate::consts::*;

/// Hazard spawn rate multiplier: 1.0 below 100, +0.1 per 20 points, capped at 1.6
pub fn spawn_multiplier(score: u32) -> f64 {
    if score < 100 {
        return 1.0;
    }
    let steps = (score - 100) / 20;
    (1.0 + 0.1 * steps as f64).min(1.6)
}

/// Acc interval, tripled rate while score is in [15, 30]
pub fn acc_interval(score: u32) -> f64 {
    if (15..=30).contains(&score) {
        BASE_ACC_INTERVAL / 3.0
    } else {
        BASE_ACC_INTERVAL
    }
}

/// Minimum time between spawn attempts for a category
pub fn interval(category: Category, score: u32) -> f64 {
    match category {
        Category::Hazard => BASE_INTERVAL / spawn_multiplier(score),
        Category::Acc => acc_interval(score),
        Category::Tent => BASE_TENT_INTERVAL,
        Category::Balloon => BASE_BALLOON_INTERVAL,
    }
}

/// Last-attempt timestamps (ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub hazard: f64,
    pub acc: f64,
    pub tent: f64,
    pub balloon: f64,
}

impl SpawnTimers {
    pub fn new(now: f64) -> Self {
        Self {
            hazard: now,
            acc: now,
            tent: now,
            balloon: now,
        }
    }

    pub fn last(&self, category: Category) -> f64 {
        match category {
            Category::Hazard => self.hazard,
            Category::Acc => self.acc,
            Category::Tent => self.tent,
            Category::Balloon => self.balloon,
        }
    }

    pub fn mark(&mut self, category: Category, now: f64) {
        match category {
            Category::Hazard => self.hazard = now,
            Category::Acc => self.acc = now,
            Category::Tent => self.tent = now,
            Category::Balloon => self.balloon = now,
        }
    }

    /// Whether `category` may attempt a spawn at `now`
    pub fn is_due(&self, category: Category, score: u32, now: f64) -> bool {
        now - self.last(category) >= interval(category, score)
    }

    /// Push every timer forward (after a pause of `delta` ms)
    pub fn shift(&mut self, delta: f64) {
        self.hazard += delta;
        self.acc += delta;
        self.tent += delta;
        self.balloon += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_multiplier_steps() {
        assert_eq!(spawn_multiplier(0), 1.0);
        assert_eq!(spawn_multiplier(99), 1.0);
        assert_eq!(spawn_multiplier(100), 1.0);
        assert_eq!(spawn_multiplier(119), 1.0);
        assert!((spawn_multiplier(120) - 1.1).abs() < 1e-9);
        assert!((spawn_multiplier(159) - 1.2).abs() < 1e-9);
        assert!((spawn_multiplier(300) - 1.6).abs() < 1e-9);
        assert!((spawn_multiplier(10_000) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_acc_interval_window() {
        assert_eq!(acc_interval(14), BASE_ACC_INTERVAL);
        assert_eq!(acc_interval(15), BASE_ACC_INTERVAL / 3.0);
        assert_eq!(acc_interval(30), BASE_ACC_INTERVAL / 3.0);
        assert_eq!(acc_interval(31), BASE_ACC_INTERVAL);
    }

    #[test]
    fn test_fixed_intervals() {
        assert_eq!(interval(Category::Tent, 500), 7000.0);
        assert_eq!(interval(Category::Balloon, 0), 6500.0);
        assert_eq!(interval(Category::Hazard, 0), BASE_INTERVAL);
    }

    #[test]
    fn test_due_and_shift() {
        let mut timers = SpawnTimers::new(1000.0);
        assert!(!timers.is_due(Category::Tent, 0, 7999.0));
        assert!(timers.is_due(Category::Tent, 0, 8000.0));

        timers.shift(500.0);
        assert!(!timers.is_due(Category::Tent, 0, 8000.0));
        assert!(timers.is_due(Category::Tent, 0, 8500.0));

        timers.mark(Category::Tent, 8500.0);
        assert_eq!(timers.tent, 8500.0);
        assert_eq!(timers.hazard, 1500.0);
    }

    #[test]
    fn test_high_score_shortens_hazard_interval() {
        let last = 1000.0;
        let timers = SpawnTimers::new(last);
        // 1900 / 1.1 ~= 1727.3
        assert!(timers.is_due(Category::Hazard, 120, last + 1728.0));
        assert!(!timers.is_due(Category::Hazard, 119, last + 1728.0));
        assert!(timers.is_due(Category::Hazard, 119, last + BASE_INTERVAL));
    }

    #[test]
    fn test_acc_rush_window_schedule() {
        let last = 1000.0;
        let timers = SpawnTimers::new(last);
        // 2600 / 3 ~= 866.7
        assert!(timers.is_due(Category::Acc, 15, last + 867.0));
        assert!(timers.is_due(Category::Acc, 30, last + 867.0));
        assert!(!timers.is_due(Category::Acc, 14, last + 867.0));
        assert!(!timers.is_due(Category::Acc, 31, last + 867.0));
    }

    proptest! {
        #[test]
        fn prop_spawn_multiplier_bounded_and_monotonic(score in 0u32..100_000) {
            let m = spawn_multiplier(score);
            prop_assert!((1.0..=1.6 + 1e-9).contains(&m));
            prop_assert!(spawn_multiplier(score + 1) >= m);
        }

        #[test]
        fn prop_spawn_multiplier_changes_only_on_steps(score in 100u32..1000) {
            if (score - 100) % 20 != 0 {
                prop_assert_eq!(spawn_multiplier(score), spawn_multiplier(score - 1));
            }
        }
    }
}
