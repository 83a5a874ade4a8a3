//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-based physics (one step per animation frame, no dt scaling)
//! - Seeded RNG only, so a seed replays the same obstacle stream
//! - Stable per-category entity order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effect;
pub mod factory;
pub mod pause;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use effect::EffectTimer;
pub use factory::{HAZARD_TABLE, HazardRule, pick_weighted};
pub use pause::PauseController;
pub use snapshot::{EffectView, Snapshot};
pub use spawn::{SpawnTimers, acc_interval, spawn_multiplier};
pub use state::{
    Category, Entities, Entity, EntityKind, GameEvent, GameState, HazardVariant, MatchPhase,
    Player,
};
pub use tick::{TickInput, tick};
