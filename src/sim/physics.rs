//! Vertical player physics and entity scrolling
//!
//! Frame-based: one call per animation frame, no dt scaling.

use super::state::{Entities, Player};
use crate::consts::*;

/// Apply gravity, integrate position and clamp to the ground line
pub fn integrate(player: &mut Player, gravity: f32, ground_y: f32) {
    player.vel_y += gravity;
    player.pos.y += player.vel_y;

    if player.pos.y + player.size.y > ground_y {
        player.pos.y = ground_y - player.size.y;
        player.vel_y = 0.0;
        player.jump_count = 0;
    }
}

/// Jump if budget remains. Returns false (and changes nothing) once exhausted.
pub fn do_jump(player: &mut Player) -> bool {
    if player.jump_count >= MAX_JUMPS {
        return false;
    }
    player.vel_y = if player.jump_count == 0 {
        FIRST_JUMP_POWER
    } else {
        JUMP_POWER
    };
    player.jump_count += 1;
    true
}

/// Scroll every entity left by its own speed
pub fn advance_entities(entities: &mut Entities) {
    for entity in entities.iter_mut() {
        entity.pos.x -= entity.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Entity, EntityKind, HazardVariant};
    use glam::Vec2;

    fn airborne_player() -> Player {
        let settings = Settings::default();
        let mut player = Player::new(&settings);
        player.pos.y -= 200.0;
        player
    }

    #[test]
    fn test_gravity_integration() {
        let mut player = airborne_player();
        let y0 = player.pos.y;
        integrate(&mut player, 0.5, 690.0);
        assert_eq!(player.vel_y, 0.5);
        assert_eq!(player.pos.y, y0 + 0.5);
        integrate(&mut player, 0.5, 690.0);
        assert_eq!(player.vel_y, 1.0);
        assert_eq!(player.pos.y, y0 + 1.5);
    }

    #[test]
    fn test_ground_clamp_resets_jumps() {
        let mut player = airborne_player();
        player.vel_y = 300.0;
        player.jump_count = 2;
        integrate(&mut player, 0.5, 690.0);
        assert_eq!(player.pos.y + player.size.y, 690.0);
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.jump_count, 0);
    }

    #[test]
    fn test_jump_budget() {
        let mut player = airborne_player();
        player.pos.y = 690.0 - player.size.y;

        assert!(do_jump(&mut player));
        assert_eq!(player.vel_y, FIRST_JUMP_POWER);
        player.vel_y = 3.0;
        assert!(do_jump(&mut player));
        assert_eq!(player.vel_y, JUMP_POWER);
        player.vel_y = 3.0;
        assert!(do_jump(&mut player));
        assert_eq!(player.vel_y, JUMP_POWER);
        assert_eq!(player.jump_count, MAX_JUMPS);

        // Fourth jump is a silent no-op
        player.vel_y = 3.0;
        assert!(!do_jump(&mut player));
        assert_eq!(player.vel_y, 3.0);
        assert_eq!(player.jump_count, MAX_JUMPS);
    }

    #[test]
    fn test_advance_entities_uses_own_speed() {
        let mut entities = Entities::default();
        entities.push(Entity {
            kind: EntityKind::Hazard(HazardVariant::Fast),
            pos: Vec2::new(100.0, 0.0),
            size: Vec2::splat(10.0),
            speed: BASE_SPEED * 1.7,
        });
        entities.push(Entity {
            kind: EntityKind::Acc,
            pos: Vec2::new(100.0, 0.0),
            size: Vec2::splat(10.0),
            speed: BASE_SPEED,
        });
        advance_entities(&mut entities);
        assert!((entities.hazards[0].pos.x - (100.0 - 6.8)).abs() < 1e-4);
        assert_eq!(entities.accs[0].pos.x, 96.0);
    }
}
