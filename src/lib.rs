//! Momo Dash - A side-scrolling multi-jump reflex game
//!
//! Core modules:
//! - `sim`: Simulation loop (physics, spawning, collisions, pause accounting)
//! - `platform`: Clock abstraction
//! - `settings`: Viewport, orientation and tuning configuration
//! - `audio`: Sound cue dispatch to a host-provided backend
//! - `ui`: Presentation state derived from events and snapshots

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{AspectRatios, Orientation, Settings};

/// Game configuration constants
pub mod consts {
    /// Player base width before orientation scaling
    pub const BASE_PLAYER_WIDTH: f32 = 80.0;
    /// Fixed horizontal position of the player
    pub const PLAYER_X: f32 = 50.0;

    /// Velocity set by the first jump from the ground (negative = up)
    pub const FIRST_JUMP_POWER: f32 = -17.0;
    /// Velocity set by each mid-air jump
    pub const JUMP_POWER: f32 = -15.0;
    /// Jump budget between landings
    pub const MAX_JUMPS: u8 = 3;

    /// Scroll speed in pixels per frame
    pub const BASE_SPEED: f32 = 4.0;

    /// Fraction of the smaller area that must overlap to count as a hit
    pub const COLLIDE_THRESHOLD: f32 = 0.4;

    /// Ground strip thickness
    pub const GROUND_HEIGHT: f32 = 10.0;
    /// Gap between the ground strip and the bottom of the canvas
    pub const GROUND_OFFSET: f32 = 20.0;

    /// Spawn intervals (ms)
    pub const BASE_INTERVAL: f64 = 1900.0;
    pub const BASE_ACC_INTERVAL: f64 = 2600.0;
    pub const BASE_TENT_INTERVAL: f64 = 7000.0;
    pub const BASE_BALLOON_INTERVAL: f64 = 6500.0;

    /// Extra clearance added to the player width for the overlap guard
    pub const SPAWN_CLEARANCE: f32 = 50.0;

    /// Balloon low-gravity buff duration (ms)
    pub const BALLOON_EFFECT_MS: f64 = 5000.0;
    /// Growth factor applied per acc pickup
    pub const ACC_GROWTH: f32 = 1.2;
}
