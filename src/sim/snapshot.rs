//! Read-only per-frame view handed to the renderer

use serde::Serialize;

use super::state::{Entity, GameState, MatchPhase, Player};

/// Buff state as the HUD needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectView {
    pub active: bool,
    /// Milliseconds left while active
    pub remaining_ms: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: MatchPhase,
    pub score: u32,
    pub ground_line: f32,
    pub player: &'a Player,
    pub hazards: &'a [Entity],
    pub accs: &'a [Entity],
    pub tents: &'a [Entity],
    pub balloons: &'a [Entity],
    pub effect: EffectView,
}

impl Snapshot<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self, now: f64) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            ground_line: self.settings.ground_line(),
            player: &self.player,
            hazards: &self.entities.hazards,
            accs: &self.entities.accs,
            tents: &self.entities.tents,
            balloons: &self.entities.balloons,
            effect: EffectView {
                active: self.effect.is_active(),
                remaining_ms: self.effect.remaining(now),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::Settings;
    use crate::sim::state::{GameState, MatchPhase};

    #[test]
    fn test_snapshot_json() {
        let mut state = GameState::new(Settings::default(), 5);
        state.effect.activate(0.0, 5000.0);
        let snap = state.snapshot(1000.0);
        assert_eq!(snap.phase, MatchPhase::NotStarted);
        assert_eq!(snap.effect.remaining_ms, Some(4000.0));

        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "NotStarted");
        assert_eq!(value["score"], 0);
        assert_eq!(value["effect"]["active"], true);
        assert!(value["hazards"].as_array().unwrap().is_empty());
    }
}
