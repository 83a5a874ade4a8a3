//! Game settings and tuning
//!
//! Loaded from a JSON file on native; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Device orientation, decides sprite scale and gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    /// Narrow screens (width < height) get smaller sprites and heavier gravity
    Portrait,
}

impl Orientation {
    pub fn from_viewport(width: f32, height: f32) -> Self {
        if width < height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }

    /// Sprite scale factor
    pub fn scale(&self) -> f32 {
        match self {
            Orientation::Landscape => 1.0,
            Orientation::Portrait => 0.6,
        }
    }

    /// Gravity per frame outside of any buff
    pub fn normal_gravity(&self) -> f32 {
        match self {
            Orientation::Landscape => 0.5,
            Orientation::Portrait => 0.8,
        }
    }

    /// Gravity per frame while the balloon buff is active
    pub fn reduced_gravity(&self) -> f32 {
        match self {
            Orientation::Landscape => 0.25,
            Orientation::Portrait => 0.4,
        }
    }
}

/// Intrinsic height/width ratio of each sprite
///
/// The core never decodes images; the host fills these in from asset metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectRatios {
    pub player: f32,
    pub hazard: f32,
    pub acc: f32,
    pub tent: f32,
    pub balloon: f32,
}

impl Default for AspectRatios {
    fn default() -> Self {
        Self {
            player: 1.0,
            hazard: 0.75,
            acc: 1.0,
            tent: 0.8,
            balloon: 1.4,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub orientation: Orientation,

    // === Physics ===
    pub normal_gravity: f32,
    pub reduced_gravity: f32,

    // === Assets ===
    pub aspect: AspectRatios,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_viewport(1280.0, 720.0)
    }
}

impl Settings {
    /// Settings for a canvas of the given size (orientation derived from it)
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let orientation = Orientation::from_viewport(width, height);
        Self {
            canvas_width: width,
            canvas_height: height,
            orientation,
            normal_gravity: orientation.normal_gravity(),
            reduced_gravity: orientation.reduced_gravity(),
            aspect: AspectRatios::default(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    /// Sprite scale factor for the configured orientation
    pub fn scale(&self) -> f32 {
        self.orientation.scale()
    }

    /// Y coordinate of the top of the ground strip
    pub fn ground_line(&self) -> f32 {
        self.canvas_height - GROUND_HEIGHT - GROUND_OFFSET
    }

    /// Scaled player width (before any pickups)
    pub fn player_width(&self) -> f32 {
        BASE_PLAYER_WIDTH * self.scale()
    }

    /// Player dimensions at match start and after a tent pickup
    pub fn player_base_size(&self) -> glam::Vec2 {
        let w = self.player_width();
        glam::Vec2::new(w, w * self.aspect.player)
    }

    /// Minimum horizontal gap between a new spawn and any existing entity
    pub fn spawn_safe_distance(&self) -> f32 {
        self.player_width() + SPAWN_CLEARANCE
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
