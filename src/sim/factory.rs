//! Obstacle and pickup construction
//!
//! Picks start position, variant, size and speed for one spawn attempt. Every
//! attempt may decline (overlap guard, score gate) and return `None`; the
//! scheduler treats a declined attempt as a consumed interval.

use glam::Vec2;
use rand::Rng;

use super::state::{Category, Entities, Entity, EntityKind, HazardVariant};
use crate::consts::*;
use crate::settings::Settings;

/// Unscaled sprite widths
pub const HAZARD_BASE_WIDTH: f32 = 60.0;
pub const ACC_BASE_WIDTH: f32 = 60.0;
pub const TENT_BASE_WIDTH: f32 = 100.0;
pub const BALLOON_BASE_WIDTH: f32 = 60.0;

/// Random x range beyond the right edge of the canvas
pub const NEAR_SPAWN_RANGE: f32 = 200.0;
pub const FAR_SPAWN_RANGE: f32 = 400.0;

pub const CRAWLER_MIN_SCORE: u32 = 55;
pub const CRAWLER_CHANCE: f32 = 0.15;
pub const LARGE_MIN_SCORE: u32 = 40;
pub const LARGE_CHANCE: f32 = 0.2;
pub const LARGE_SCALE: f32 = 1.5;

/// Elevated hazards fly at this fraction of the canvas height
pub const ELEVATED_HEIGHT_RATIO: f32 = 0.15;
/// Large flying hazards stay inside this band of the canvas height
pub const FLYING_BAND: (f32, f32) = (0.3, 0.7);

/// Accs may float from this y down to the ground once unlocked
pub const ACC_MIN_Y: f32 = 200.0;
pub const ACC_FLOAT_MIN_SCORE: u32 = 10;

pub const BALLOON_MIN_SCORE: u32 = 30;
pub const BALLOON_HEIGHT_RATIO: f32 = 0.9;

/// One entry of the default hazard table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardRule {
    pub variant: HazardVariant,
    /// Rule is eligible once score reaches this
    pub min_score: u32,
    pub weight: f32,
}

/// Default hazard mix, sampled in this order
pub const HAZARD_TABLE: [HazardRule; 3] = [
    HazardRule {
        variant: HazardVariant::Ground,
        min_score: 0,
        weight: 50.0,
    },
    HazardRule {
        variant: HazardVariant::Fast,
        min_score: 20,
        weight: 20.0,
    },
    HazardRule {
        variant: HazardVariant::Elevated,
        min_score: 15,
        weight: 30.0,
    },
];

/// Rules available at `score`
pub fn eligible_rules(score: u32) -> Vec<HazardRule> {
    HAZARD_TABLE
        .iter()
        .copied()
        .filter(|rule| score >= rule.min_score)
        .collect()
}

/// Walk the weights and return the first index whose weight exceeds the
/// remaining draw. `r` is expected in `[0, sum(weights))`; anything past the
/// end falls back to index 0.
pub fn pick_weighted(weights: &[f32], r: f32) -> usize {
    let mut remaining = r;
    for (i, &w) in weights.iter().enumerate() {
        if remaining < w {
            return i;
        }
        remaining -= w;
    }
    0
}

/// Overlap guard: no existing entity within `safe` pixels of `x`
pub fn is_clear(existing: &Entities, x: f32, safe: f32) -> bool {
    !existing.iter().any(|e| (e.pos.x - x).abs() < safe)
}

/// Build one entity for `category`, or `None` if the attempt is declined
pub fn spawn<R: Rng + ?Sized>(
    category: Category,
    score: u32,
    settings: &Settings,
    existing: &Entities,
    rng: &mut R,
) -> Option<Entity> {
    match category {
        Category::Hazard => spawn_hazard(score, settings, existing, rng),
        Category::Acc => spawn_acc(score, settings, existing, rng),
        Category::Tent => spawn_tent(settings, existing, rng),
        Category::Balloon => spawn_balloon(score, settings, existing, rng),
    }
}

pub fn spawn_hazard<R: Rng + ?Sized>(
    score: u32,
    settings: &Settings,
    existing: &Entities,
    rng: &mut R,
) -> Option<Entity> {
    let x = start_x(settings, NEAR_SPAWN_RANGE, existing, rng)?;
    let variant = choose_hazard(score, rng);
    let (size, y, speed) = hazard_kinematics(variant, settings, rng);

    Some(Entity {
        kind: EntityKind::Hazard(variant),
        pos: Vec2::new(x, y),
        size,
        speed,
    })
}

/// Score-gated special variants first, then the weighted table
pub fn choose_hazard<R: Rng + ?Sized>(score: u32, rng: &mut R) -> HazardVariant {
    if score >= CRAWLER_MIN_SCORE && roll(rng, CRAWLER_CHANCE) {
        return HazardVariant::Crawler;
    }

    if score >= LARGE_MIN_SCORE && roll(rng, LARGE_CHANCE) {
        return if roll(rng, 0.5) {
            HazardVariant::LargeFlying
        } else {
            HazardVariant::LargeGround
        };
    }

    let rules = eligible_rules(score);
    let weights: Vec<f32> = rules.iter().map(|rule| rule.weight).collect();
    let total: f32 = weights.iter().sum();
    let r = rng.random::<f32>() * total;
    rules[pick_weighted(&weights, r)].variant
}

/// Size, y and speed for a hazard variant
fn hazard_kinematics<R: Rng + ?Sized>(
    variant: HazardVariant,
    settings: &Settings,
    rng: &mut R,
) -> (Vec2, f32, f32) {
    let standard = sprite_size(settings, HAZARD_BASE_WIDTH, settings.aspect.hazard);
    let ground = settings.ground_line();
    let h = settings.canvas_height;

    match variant {
        HazardVariant::Ground => (standard, ground - standard.y, BASE_SPEED),
        HazardVariant::Fast => (standard, ground - standard.y, BASE_SPEED * 1.7),
        HazardVariant::Elevated => (standard, h * ELEVATED_HEIGHT_RATIO, BASE_SPEED * 1.2),
        HazardVariant::Crawler => (standard, ground - standard.y, BASE_SPEED * 0.5),
        HazardVariant::LargeGround => {
            let size = standard * LARGE_SCALE;
            (size, ground - size.y, BASE_SPEED)
        }
        HazardVariant::LargeFlying => {
            let size = standard * LARGE_SCALE;
            let (lo, hi) = (h * FLYING_BAND.0, h * FLYING_BAND.1);
            let y = lo + rng.random::<f32>() * (hi - lo);
            let speed = BASE_SPEED * (1.1 + rng.random::<f32>() * 0.4);
            (size, y, speed)
        }
    }
}

pub fn spawn_acc<R: Rng + ?Sized>(
    score: u32,
    settings: &Settings,
    existing: &Entities,
    rng: &mut R,
) -> Option<Entity> {
    let x = start_x(settings, NEAR_SPAWN_RANGE, existing, rng)?;
    let size = sprite_size(settings, ACC_BASE_WIDTH, settings.aspect.acc);
    let ground_y = settings.ground_line() - size.y;
    let y = if score >= ACC_FLOAT_MIN_SCORE && roll(rng, 0.5) {
        ACC_MIN_Y + rng.random::<f32>() * (ground_y - ACC_MIN_Y)
    } else {
        ground_y
    };

    Some(Entity {
        kind: EntityKind::Acc,
        pos: Vec2::new(x, y),
        size,
        speed: BASE_SPEED,
    })
}

pub fn spawn_tent<R: Rng + ?Sized>(
    settings: &Settings,
    existing: &Entities,
    rng: &mut R,
) -> Option<Entity> {
    let x = start_x(settings, FAR_SPAWN_RANGE, existing, rng)?;
    let size = sprite_size(settings, TENT_BASE_WIDTH, settings.aspect.tent);

    Some(Entity {
        kind: EntityKind::Tent,
        pos: Vec2::new(x, settings.ground_line() - size.y),
        size,
        speed: BASE_SPEED,
    })
}

pub fn spawn_balloon<R: Rng + ?Sized>(
    score: u32,
    settings: &Settings,
    existing: &Entities,
    rng: &mut R,
) -> Option<Entity> {
    if score < BALLOON_MIN_SCORE {
        return None;
    }
    let x = start_x(settings, FAR_SPAWN_RANGE, existing, rng)?;
    let size = sprite_size(settings, BALLOON_BASE_WIDTH, settings.aspect.balloon);

    Some(Entity {
        kind: EntityKind::Balloon,
        pos: Vec2::new(x, settings.canvas_height * BALLOON_HEIGHT_RATIO - size.y),
        size,
        speed: BASE_SPEED,
    })
}

/// Random x past the right edge, or `None` if the overlap guard rejects it
fn start_x<R: Rng + ?Sized>(
    settings: &Settings,
    range: f32,
    existing: &Entities,
    rng: &mut R,
) -> Option<f32> {
    let x = settings.canvas_width + rng.random::<f32>() * range;
    is_clear(existing, x, settings.spawn_safe_distance()).then_some(x)
}

fn sprite_size(settings: &Settings, base_width: f32, aspect: f32) -> Vec2 {
    let w = base_width * settings.scale();
    Vec2::new(w, w * aspect)
}

#[inline]
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f32) -> bool {
    rng.random::<f32>() < chance
}
