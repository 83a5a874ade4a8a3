//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effect::EffectTimer;
use super::pause::PauseController;
use super::spawn::SpawnTimers;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting on the start overlay
    NotStarted,
    /// Active gameplay
    Running,
    /// Frozen; still rendered
    Paused,
    /// Player hit a hazard
    Over,
}

/// Spawn categories, in the order the scheduler evaluates them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hazard,
    Acc,
    Tent,
    Balloon,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hazard,
        Category::Acc,
        Category::Tent,
        Category::Balloon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hazard => "hazard",
            Category::Acc => "acc",
            Category::Tent => "tent",
            Category::Balloon => "balloon",
        }
    }
}

/// Hazard flavours produced by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardVariant {
    /// Standard size, normal speed, on the ground
    Ground,
    /// Standard size, 1.7x speed, on the ground
    Fast,
    /// Standard size, 1.2x speed, high in the air
    Elevated,
    /// Standard size, half speed, on the ground (score >= 55)
    Crawler,
    /// 1.5x size on the ground (score >= 40)
    LargeGround,
    /// 1.5x size in the middle band of the screen (score >= 40)
    LargeFlying,
}

/// Entity kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Hazard(HazardVariant),
    Acc,
    Tent,
    Balloon,
}

impl EntityKind {
    pub fn category(&self) -> Category {
        match self {
            EntityKind::Hazard(_) => Category::Hazard,
            EntityKind::Acc => Category::Acc,
            EntityKind::Tent => Category::Tent,
            EntityKind::Balloon => Category::Balloon,
        }
    }
}

/// An obstacle or pickup scrolling in from the right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed in pixels per frame
    pub speed: f32,
}

impl Entity {
    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vel_y: f32,
    /// Jumps used since last landing (0..=MAX_JUMPS)
    pub jump_count: u8,
}

impl Player {
    /// Player at base size resting on the ground
    pub fn new(settings: &Settings) -> Self {
        let size = settings.player_base_size();
        Self {
            pos: Vec2::new(PLAYER_X, settings.ground_line() - size.y),
            size,
            vel_y: 0.0,
            jump_count: 0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.jump_count == 0 && self.vel_y == 0.0
    }
}

/// Per-category entity collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entities {
    pub hazards: Vec<Entity>,
    pub accs: Vec<Entity>,
    pub tents: Vec<Entity>,
    pub balloons: Vec<Entity>,
}

impl Entities {
    pub fn get_mut(&mut self, category: Category) -> &mut Vec<Entity> {
        match category {
            Category::Hazard => &mut self.hazards,
            Category::Acc => &mut self.accs,
            Category::Tent => &mut self.tents,
            Category::Balloon => &mut self.balloons,
        }
    }

    /// Add an entity to the collection matching its kind
    pub fn push(&mut self, entity: Entity) {
        self.get_mut(entity.kind.category()).push(entity);
    }

    /// Every entity across all categories
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.hazards
            .iter()
            .chain(&self.accs)
            .chain(&self.tents)
            .chain(&self.balloons)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.hazards
            .iter_mut()
            .chain(&mut self.accs)
            .chain(&mut self.tents)
            .chain(&mut self.balloons)
    }

    pub fn len(&self) -> usize {
        self.hazards.len() + self.accs.len() + self.tents.len() + self.balloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.hazards.clear();
        self.accs.clear();
        self.tents.clear();
        self.balloons.clear();
    }

    /// Drop everything that has scrolled off the left edge
    pub fn remove_offscreen(&mut self) {
        for category in Category::ALL {
            self.get_mut(category).retain(|e| !e.is_offscreen());
        }
    }
}

/// Discrete events for the host (sound, score flash)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Match started; start background music
    Started,
    /// A collectible was picked up
    Point { score: u32 },
    /// Hazard hit; match over
    Crash { score: u32 },
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: MatchPhase,
    pub score: u32,
    pub player: Player,
    pub entities: Entities,
    pub timers: SpawnTimers,
    pub effect: EffectTimer,
    pub pause: PauseController,
    /// Frames simulated while Running
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh match waiting for the start input
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            seed,
            player: Player::new(&settings),
            settings,
            phase: MatchPhase::NotStarted,
            score: 0,
            entities: Entities::default(),
            timers: SpawnTimers::new(0.0),
            effect: EffectTimer::default(),
            pause: PauseController::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Rebuild from scratch with a new seed
    pub fn reset(&mut self, seed: u64) {
        let settings = self.settings.clone();
        *self = Self::new(settings, seed);
    }

    /// Effective gravity this frame
    pub fn gravity(&self) -> f32 {
        if self.effect.is_active() {
            self.settings.reduced_gravity
        } else {
            self.settings.normal_gravity
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events (call once per frame after `tick`)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(kind: EntityKind, x: f32, w: f32) -> Entity {
        Entity {
            kind,
            pos: Vec2::new(x, 0.0),
            size: Vec2::new(w, 10.0),
            speed: BASE_SPEED,
        }
    }

    #[test]
    fn test_player_starts_on_ground() {
        let settings = Settings::for_viewport(1280.0, 720.0);
        let player = Player::new(&settings);
        assert_eq!(player.pos.x, PLAYER_X);
        assert_eq!(player.pos.y + player.size.y, settings.ground_line());
        assert!(player.is_grounded());
    }

    #[test]
    fn test_entities_routed_by_kind() {
        let mut entities = Entities::default();
        entities.push(entity(EntityKind::Hazard(HazardVariant::Fast), 10.0, 5.0));
        entities.push(entity(EntityKind::Tent, 10.0, 5.0));
        entities.push(entity(EntityKind::Tent, 20.0, 5.0));
        assert_eq!(entities.hazards.len(), 1);
        assert_eq!(entities.tents.len(), 2);
        assert_eq!(entities.len(), 3);
        assert_eq!(entities.iter().count(), 3);
    }

    #[test]
    fn test_remove_offscreen() {
        let mut entities = Entities::default();
        entities.push(entity(EntityKind::Acc, -10.0, 10.0)); // right edge at 0
        entities.push(entity(EntityKind::Acc, -10.0, 10.5));
        entities.push(entity(EntityKind::Balloon, -100.0, 20.0));
        entities.remove_offscreen();
        assert_eq!(entities.accs.len(), 1);
        assert!(entities.balloons.is_empty());
        assert!(entities.iter().all(|e| e.pos.x + e.size.x > 0.0));
    }

    #[test]
    fn test_reset_rebuilds_state() {
        let mut state = GameState::new(Settings::default(), 7);
        state.score = 12;
        state.phase = MatchPhase::Over;
        state.entities.push(entity(EntityKind::Tent, 10.0, 5.0));
        state.emit(GameEvent::Crash { score: 12 });
        state.reset(8);
        assert_eq!(state.seed, 8);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, MatchPhase::NotStarted);
        assert!(state.entities.is_empty());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(Settings::default(), 1);
        state.emit(GameEvent::Point { score: 1 });
        assert_eq!(state.drain_events(), vec![GameEvent::Point { score: 1 }]);
        assert!(state.drain_events().is_empty());
    }
}
