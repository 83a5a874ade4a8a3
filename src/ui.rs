//! HUD state derived from simulation events and snapshots
//!
//! Nothing here draws; it only decides what the renderer should show. Blink
//! timers are plain deadlines owned by the HUD and never touch the simulation.

use serde::Serialize;

use crate::sim::{EffectView, GameEvent, Player};

/// How long the score flashes after a point (ms)
pub const SCORE_BLINK_MS: f64 = 500.0;
/// Buff indicator starts blinking with this much time left (ms)
pub const EFFECT_WARNING_MS: f64 = 1000.0;
/// Half-period of the buff indicator blink (ms)
pub const EFFECT_BLINK_MS: f64 = 250.0;
/// Idle animation frame length (ms)
pub const IDLE_FRAME_MS: f64 = 200.0;

/// Score counter with a short flash after every point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDisplay {
    pub text: String,
    blink_until: Option<f64>,
}

impl Default for ScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreDisplay {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            blink_until: None,
        }
    }

    pub fn apply(&mut self, events: &[GameEvent], now: f64) {
        for event in events {
            match event {
                GameEvent::Started => {
                    self.text = "0".to_string();
                    self.blink_until = None;
                }
                GameEvent::Point { score } => {
                    self.text = score.to_string();
                    self.blink_until = Some(now + SCORE_BLINK_MS);
                }
                GameEvent::Crash { .. } => {}
            }
        }
    }

    pub fn is_blinking(&self, now: f64) -> bool {
        self.blink_until.is_some_and(|until| now < until)
    }
}

/// Game over artwork, chosen by final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum GameOverTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
    Tier6,
}

impl GameOverTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..20 => GameOverTier::Tier1,
            20..50 => GameOverTier::Tier2,
            50..80 => GameOverTier::Tier3,
            80..150 => GameOverTier::Tier4,
            150..300 => GameOverTier::Tier5,
            _ => GameOverTier::Tier6,
        }
    }

    /// Sprite key in the asset pack
    pub fn asset_key(&self) -> &'static str {
        match self {
            GameOverTier::Tier1 => "gameover",
            GameOverTier::Tier2 => "gameover2",
            GameOverTier::Tier3 => "gameover3",
            GameOverTier::Tier4 => "gameover4",
            GameOverTier::Tier5 => "gameover5",
            GameOverTier::Tier6 => "gameover6",
        }
    }
}

/// Whether the balloon above the player is drawn this frame
pub fn effect_indicator_visible(effect: &EffectView) -> bool {
    match (effect.active, effect.remaining_ms) {
        (true, Some(remaining)) if remaining < EFFECT_WARNING_MS => {
            (remaining / EFFECT_BLINK_MS).floor() as i64 % 2 == 0
        }
        (true, _) => true,
        (false, _) => false,
    }
}

/// Player sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerPose {
    Idle,
    IdleAlt,
    Airborne,
}

impl PlayerPose {
    /// Grounded players alternate between two frames
    pub fn for_player(player: &Player, now: f64) -> Self {
        if !player.is_grounded() {
            return PlayerPose::Airborne;
        }
        if (now / IDLE_FRAME_MS).floor() as i64 % 2 == 0 {
            PlayerPose::Idle
        } else {
            PlayerPose::IdleAlt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_score_display_default_matches_new() {
        assert_eq!(ScoreDisplay::default(), ScoreDisplay::new());
        assert_eq!(ScoreDisplay::default().text, "0");
    }

    #[test]
    fn test_score_display_blinks_on_point() {
        let mut hud = ScoreDisplay::new();
        hud.apply(&[GameEvent::Started], 0.0);
        assert!(!hud.is_blinking(0.0));

        hud.apply(&[GameEvent::Point { score: 3 }], 1000.0);
        assert_eq!(hud.text, "3");
        assert!(hud.is_blinking(1499.0));
        assert!(!hud.is_blinking(1500.0));
    }

    #[test]
    fn test_game_over_tiers() {
        assert_eq!(GameOverTier::from_score(0), GameOverTier::Tier1);
        assert_eq!(GameOverTier::from_score(19), GameOverTier::Tier1);
        assert_eq!(GameOverTier::from_score(20), GameOverTier::Tier2);
        assert_eq!(GameOverTier::from_score(79), GameOverTier::Tier3);
        assert_eq!(GameOverTier::from_score(149), GameOverTier::Tier4);
        assert_eq!(GameOverTier::from_score(299), GameOverTier::Tier5);
        assert_eq!(GameOverTier::from_score(300).asset_key(), "gameover6");
    }

    #[test]
    fn test_effect_indicator_blinks_near_expiry() {
        let view = |remaining| EffectView {
            active: true,
            remaining_ms: Some(remaining),
        };
        assert!(effect_indicator_visible(&view(3000.0)));
        assert!(!effect_indicator_visible(&view(900.0)));
        assert!(effect_indicator_visible(&view(600.0)));
        assert!(!effect_indicator_visible(&view(300.0)));
        assert!(effect_indicator_visible(&view(100.0)));
        assert!(!effect_indicator_visible(&EffectView {
            active: false,
            remaining_ms: None,
        }));
    }

    #[test]
    fn test_player_pose() {
        let mut player = Player::new(&Settings::default());
        assert_eq!(PlayerPose::for_player(&player, 100.0), PlayerPose::Idle);
        assert_eq!(PlayerPose::for_player(&player, 250.0), PlayerPose::IdleAlt);
        player.jump_count = 1;
        player.vel_y = -10.0;
        assert_eq!(PlayerPose::for_player(&player, 100.0), PlayerPose::Airborne);
    }
}
