//! Collision detection and response
//!
//! Hits use a fractional-overlap rule rather than touching edges: the
//! intersection must cover at least `COLLIDE_THRESHOLD` of the smaller box.

use glam::Vec2;

use super::state::{Category, Entity, GameEvent, GameState, MatchPhase, Player};
use crate::consts::*;

/// Axis-aligned box (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Area of the intersection with `other` (0 when disjoint)
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        let overlap = (self.max().min(other.max()) - self.pos.max(other.pos)).max(Vec2::ZERO);
        overlap.x * overlap.y
    }
}

impl From<&Player> for Rect {
    fn from(player: &Player) -> Self {
        Self {
            pos: player.pos,
            size: player.size,
        }
    }
}

impl From<&Entity> for Rect {
    fn from(entity: &Entity) -> Self {
        Self {
            pos: entity.pos,
            size: entity.size,
        }
    }
}

/// Symmetric overlap test
pub fn overlaps(a: &Rect, b: &Rect, threshold: f32) -> bool {
    let min_area = a.area().min(b.area());
    a.intersection_area(b) >= min_area * threshold
}

fn hits(player: &Player, entity: &Entity) -> bool {
    overlaps(&Rect::from(player), &Rect::from(entity), COLLIDE_THRESHOLD)
}

/// Resolve player collisions against every live entity
///
/// Hazards are checked first and end the match, but pickups overlapped in
/// the same frame still count. Collectibles are scanned back to front so
/// removal doesn't skip neighbours.
pub fn resolve(state: &mut GameState, now: f64) {
    if state.phase != MatchPhase::Over
        && state.entities.hazards.iter().any(|h| hits(&state.player, h))
    {
        state.phase = MatchPhase::Over;
        log::info!("Crashed with score {}", state.score);
        state.emit(GameEvent::Crash { score: state.score });
    }

    for i in (0..state.entities.accs.len()).rev() {
        if hits(&state.player, &state.entities.accs[i]) {
            state.player.size *= ACC_GROWTH;
            collect(state, Category::Acc, i);
        }
    }

    for i in (0..state.entities.tents.len()).rev() {
        if hits(&state.player, &state.entities.tents[i]) {
            state.player.size = state.settings.player_base_size();
            collect(state, Category::Tent, i);
        }
    }

    for i in (0..state.entities.balloons.len()).rev() {
        if hits(&state.player, &state.entities.balloons[i]) {
            state.effect.activate(now, BALLOON_EFFECT_MS);
            collect(state, Category::Balloon, i);
        }
    }
}

/// Consume a collectible: remove it and award a point
fn collect(state: &mut GameState, category: Category, index: usize) {
    state.entities.get_mut(category).remove(index);
    state.score += 1;
    log::debug!("Picked up {} (score {})", category.as_str(), state.score);
    state.emit(GameEvent::Point { score: state.score });
}
